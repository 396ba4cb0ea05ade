//! Shared world state for to-do list BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_core::todo::{
    domain::{Priority, Task, TaskDomainError, TaskId},
    store::{AddTaskRequest, TaskStore},
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<DefaultClock>;

/// Scenario world for to-do list behaviour tests.
pub struct TodoListWorld {
    pub store: TestTaskStore,
    pub ids: HashMap<String, TaskId>,
    pub last_add_result: Option<Result<Task, TaskDomainError>>,
}

impl TodoListWorld {
    /// Creates a world around an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(Arc::new(DefaultClock)),
            ids: HashMap::new(),
            last_add_result: None,
        }
    }

    /// Adds a task, remembering its id by description on success.
    pub fn add(
        &mut self,
        description: &str,
        priority: &str,
    ) -> Result<Result<Task, TaskDomainError>, eyre::Report> {
        let level = Priority::try_from(priority)
            .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
        let result = self
            .store
            .add(AddTaskRequest::new(description).with_priority(level));
        if let Ok(task) = &result {
            self.ids.insert(description.to_owned(), task.id());
        }
        Ok(result)
    }

    /// Looks up the id of a task added earlier in the scenario.
    pub fn id_of(&self, description: &str) -> Result<TaskId, eyre::Report> {
        self.ids
            .get(description)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task named {description:?} in scenario world"))
    }
}

impl Default for TodoListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoListWorld {
    TodoListWorld::default()
}
