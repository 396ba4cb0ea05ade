//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use todo_core::todo::{
    config::TaskStoreConfig,
    domain::{Priority, Task, TaskId},
    session::SessionRegistry,
    store::{AddTaskRequest, TaskStore},
};

/// Registry type used across integration tests.
pub type TestRegistry = SessionRegistry<DefaultClock>;

/// Creates a registry with default configuration.
pub fn registry() -> TestRegistry {
    SessionRegistry::new(Arc::new(DefaultClock), TaskStoreConfig::default())
}

/// Adds a task and returns its identifier.
///
/// # Errors
///
/// Returns an error when the store rejects the task.
pub fn add_task(
    store: &mut TaskStore<DefaultClock>,
    description: &str,
    priority: Priority,
) -> Result<TaskId, eyre::Report> {
    let task = store.add(AddTaskRequest::new(description).with_priority(priority))?;
    Ok(task.id())
}

/// Collects task descriptions in view order.
pub fn descriptions<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<String> {
    tasks
        .into_iter()
        .map(|task| task.description().as_str().to_owned())
        .collect()
}
