//! Task entity and lifecycle types.

use super::{Priority, TaskDescription, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Lifecycle status of a live task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Task is waiting to be done.
    Pending,
    /// Task has been done.
    Completed,
}

/// Selects one of the two task sequences held by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskList {
    /// The pending sequence.
    Pending,
    /// The completed sequence.
    Completed,
}

/// A single to-do item.
///
/// Tasks are persisted only through [`crate::todo::snapshot::TaskRecord`],
/// whose restore path checks the store invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    priority: Priority,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if the task was completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task stamped with the current clock time.
    #[must_use]
    pub fn new(
        id: TaskId,
        description: TaskDescription,
        priority: Priority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            description,
            priority,
            created_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            priority: data.priority,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.is_completed() {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }

    /// Marks the task as completed at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyCompleted`] if the task was completed
    /// earlier; the original completion timestamp is kept.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if self.is_completed() {
            return Err(TaskDomainError::AlreadyCompleted(self.id));
        }
        self.completed_at = Some(clock.utc());
        Ok(())
    }
}
