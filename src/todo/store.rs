//! Session-owned task store.
//!
//! [`TaskStore`] is the sole mutator of task state. It keeps two sequences,
//! pending tasks in insertion order and completed tasks in completion order,
//! and hands out identifiers from a counter that never goes backwards. Display
//! orderings are computed on read and never reorder the stored sequences.

use super::{
    config::TaskStoreConfig,
    domain::{Priority, Task, TaskDescription, TaskDomainError, TaskId, TaskList, TaskStatistics},
    snapshot::{SnapshotError, TaskStoreSnapshot},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    description: String,
    priority: Option<Priority>,
}

impl AddTaskRequest {
    /// Creates a request with the given raw description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: None,
        }
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// In-memory pending/completed task lists for one session.
pub struct TaskStore<C>
where
    C: Clock,
{
    pending: Vec<Task>,
    completed: Vec<Task>,
    next_id: TaskId,
    clock: Arc<C>,
    config: TaskStoreConfig,
}

impl<C> fmt::Debug for TaskStore<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("pending", &self.pending)
            .field("completed", &self.completed)
            .field("next_id", &self.next_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C> TaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(clock, TaskStoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub const fn with_config(clock: Arc<C>, config: TaskStoreConfig) -> Self {
        Self {
            pending: Vec::new(),
            completed: Vec::new(),
            next_id: TaskId::FIRST,
            clock,
            config,
        }
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// Identifier assignment resumes from the snapshot's counter, so tasks
    /// added after a restore never collide with ids issued before it.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot violates a store invariant.
    pub fn restore(
        snapshot: TaskStoreSnapshot,
        clock: Arc<C>,
        config: TaskStoreConfig,
    ) -> Result<Self, SnapshotError> {
        let parts = snapshot.into_parts()?;
        debug!(
            pending = parts.pending.len(),
            completed = parts.completed.len(),
            next_id = %parts.next_id,
            "restored task store from snapshot"
        );
        Ok(Self {
            pending: parts.pending,
            completed: parts.completed,
            next_id: parts.next_id,
            clock,
            config,
        })
    }

    /// Captures the current lists and identifier counter.
    #[must_use]
    pub fn snapshot(&self) -> TaskStoreSnapshot {
        TaskStoreSnapshot::capture(self.next_id, &self.pending, &self.completed)
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Adds a pending task.
    ///
    /// The description is trimmed; when the request carries no priority the
    /// configured default applies.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] for blank descriptions
    /// and [`TaskDomainError::IdSpaceExhausted`] once the counter cannot
    /// advance. The store is unchanged on error.
    pub fn add(&mut self, request: AddTaskRequest) -> Result<Task, TaskDomainError> {
        let description = TaskDescription::new(request.description)?;
        let priority = request.priority.unwrap_or(self.config.default_priority);
        let id = self.next_id;
        let next_id = id.next().ok_or(TaskDomainError::IdSpaceExhausted)?;

        let task = Task::new(id, description, priority, &*self.clock);
        self.next_id = next_id;
        self.pending.push(task.clone());
        debug!(task_id = %id, %priority, "task added");
        Ok(task)
    }

    /// Moves the first pending task with `id` to the completed list.
    ///
    /// Returns the completed task, or `None` when no pending task has this
    /// identifier. A missing task is not an error.
    pub fn complete(&mut self, id: TaskId) -> Option<&Task> {
        let Some(position) = self.pending.iter().position(|task| task.id() == id) else {
            debug!(task_id = %id, "complete ignored, no pending task with this id");
            return None;
        };

        // Pending tasks never carry a completion timestamp: `add` creates them
        // without one and `restore` rejects pending records that have one.
        self.pending
            .get_mut(position)?
            .complete(&*self.clock)
            .ok()?;
        let task = self.pending.remove(position);
        debug!(task_id = %id, "task completed");
        self.completed.push(task);
        self.completed.last()
    }

    /// Removes every task with `id` from the selected list.
    ///
    /// Other tasks keep their relative order. Returns the number of tasks
    /// removed; deleting an absent id is a no-op returning zero.
    pub fn delete(&mut self, id: TaskId, list: TaskList) -> usize {
        let tasks = match list {
            TaskList::Pending => &mut self.pending,
            TaskList::Completed => &mut self.completed,
        };
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        let removed = before.saturating_sub(tasks.len());
        debug!(task_id = %id, ?list, removed, "task delete");
        removed
    }

    /// Empties the completed list, returning how many tasks were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.completed.len();
        self.completed.clear();
        debug!(removed, "completed tasks cleared");
        removed
    }

    /// Returns counters over both lists.
    #[must_use]
    pub fn statistics(&self) -> TaskStatistics {
        TaskStatistics::from_counts(self.pending.len(), self.completed.len())
    }

    /// Returns pending tasks in insertion order.
    #[must_use]
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Returns completed tasks in completion order, oldest first.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns pending tasks ordered high to low priority.
    ///
    /// Tasks of equal priority keep their insertion order.
    #[must_use]
    pub fn pending_by_priority(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.pending.iter().collect();
        view.sort_by_key(|task| task.priority());
        view
    }

    /// Returns the most recently completed tasks, newest first.
    ///
    /// At most `recent_completed_limit` tasks are returned; older completed
    /// tasks remain in the store.
    #[must_use]
    pub fn recent_completed(&self) -> Vec<&Task> {
        self.completed
            .iter()
            .rev()
            .take(self.config.recent_completed_limit)
            .collect()
    }

    /// Looks up a live task in either list.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.pending
            .iter()
            .chain(self.completed.iter())
            .find(|task| task.id() == id)
    }

    /// Returns whether both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }
}
