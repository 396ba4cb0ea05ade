//! Serialisable images of a task store.
//!
//! The core keeps everything in memory. A presentation shell that wants its
//! lists to survive a restart captures a [`TaskStoreSnapshot`], hands it to a
//! [`crate::todo::ports::SnapshotRepository`], and later restores a store from
//! it. Restoring re-checks every store invariant, since a snapshot may have
//! been edited or truncated on disk.

use super::domain::{
    PersistedTaskData, Priority, Task, TaskDescription, TaskDomainError, TaskId, TaskList,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Snapshot format version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors returned when a snapshot cannot be turned back into a store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot was written by an incompatible format version.
    #[error("unsupported snapshot version {0}, expected {SNAPSHOT_VERSION}")]
    UnsupportedVersion(u32),

    /// Two records share an identifier.
    #[error("duplicate task identifier {0} in snapshot")]
    DuplicateId(TaskId),

    /// A record carries an identifier the counter has not issued yet.
    #[error("task identifier {id} is not below the snapshot counter {next_id}")]
    IdBeyondCounter {
        /// Offending identifier.
        id: TaskId,
        /// Counter stored in the snapshot.
        next_id: TaskId,
    },

    /// A record has an invalid description.
    #[error("task {id} has an invalid description: {source}")]
    InvalidDescription {
        /// Offending identifier.
        id: TaskId,
        /// Underlying validation failure.
        source: TaskDomainError,
    },

    /// A record's completion fields disagree with the list it sits in.
    #[error("task {id} has completion state inconsistent with the {list:?} list")]
    InconsistentCompletion {
        /// Offending identifier.
        id: TaskId,
        /// List the record was found in.
        list: TaskList,
    },
}

/// Persisted form of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: TaskId,
    /// Trimmed description text.
    pub description: String,
    /// Task priority.
    pub priority: Priority,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Whether the task was completed.
    pub completed: bool,
    /// Completion timestamp, present only for completed tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            description: task.description().as_str().to_owned(),
            priority: task.priority(),
            created_at: task.created_at(),
            completed: task.is_completed(),
            completed_at: task.completed_at(),
        }
    }
}

/// Serialisable image of one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStoreSnapshot {
    /// Format version.
    pub version: u32,
    /// Identifier the store will assign to its next task.
    pub next_id: TaskId,
    /// Pending tasks in insertion order.
    #[serde(default)]
    pub pending: Vec<TaskRecord>,
    /// Completed tasks in completion order.
    #[serde(default)]
    pub completed: Vec<TaskRecord>,
}

/// Validated lists ready to back a store.
pub(crate) struct RestoredParts {
    pub(crate) next_id: TaskId,
    pub(crate) pending: Vec<Task>,
    pub(crate) completed: Vec<Task>,
}

impl TaskStoreSnapshot {
    pub(crate) fn capture(next_id: TaskId, pending: &[Task], completed: &[Task]) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            next_id,
            pending: pending.iter().map(TaskRecord::from).collect(),
            completed: completed.iter().map(TaskRecord::from).collect(),
        }
    }

    /// Returns the number of task records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len().saturating_add(self.completed.len())
    }

    /// Returns whether the snapshot holds no task records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    pub(crate) fn into_parts(self) -> Result<RestoredParts, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }

        let mut seen = HashSet::with_capacity(self.len());
        let next_id = self.next_id;
        let pending = restore_list(self.pending, TaskList::Pending, next_id, &mut seen)?;
        let completed = restore_list(self.completed, TaskList::Completed, next_id, &mut seen)?;

        Ok(RestoredParts {
            next_id,
            pending,
            completed,
        })
    }
}

fn restore_list(
    records: Vec<TaskRecord>,
    list: TaskList,
    next_id: TaskId,
    seen: &mut HashSet<TaskId>,
) -> Result<Vec<Task>, SnapshotError> {
    records
        .into_iter()
        .map(|record| restore_record(record, list, next_id, seen))
        .collect()
}

fn restore_record(
    record: TaskRecord,
    list: TaskList,
    next_id: TaskId,
    seen: &mut HashSet<TaskId>,
) -> Result<Task, SnapshotError> {
    let id = record.id;
    if id >= next_id {
        return Err(SnapshotError::IdBeyondCounter { id, next_id });
    }
    if !seen.insert(id) {
        return Err(SnapshotError::DuplicateId(id));
    }

    let consistent = match list {
        TaskList::Pending => !record.completed && record.completed_at.is_none(),
        TaskList::Completed => record.completed && record.completed_at.is_some(),
    };
    if !consistent {
        return Err(SnapshotError::InconsistentCompletion { id, list });
    }

    let description = TaskDescription::new(record.description)
        .map_err(|source| SnapshotError::InvalidDescription { id, source })?;

    Ok(Task::from_persisted(PersistedTaskData {
        id,
        description,
        priority: record.priority,
        created_at: record.created_at,
        completed_at: record.completed_at,
    }))
}
