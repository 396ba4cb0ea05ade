//! Then steps for to-do list BDD scenarios.

use super::world::TodoListWorld;
use rstest_bdd_macros::then;
use todo_core::todo::domain::TaskDomainError;

#[then("the completed list is empty")]
fn completed_list_is_empty(world: &TodoListWorld) -> Result<(), eyre::Report> {
    let completed = world.store.completed().len();
    if completed != 0 {
        return Err(eyre::eyre!("expected no completed tasks, found {completed}"));
    }
    Ok(())
}

#[then(r#"the pending view reads "{expected}""#)]
fn pending_view_reads(world: &TodoListWorld, expected: String) -> Result<(), eyre::Report> {
    let shown: Vec<&str> = world
        .store
        .pending_by_priority()
        .into_iter()
        .map(|task| task.description().as_str())
        .collect();
    let actual = shown.join(", ");
    if actual != expected {
        return Err(eyre::eyre!("expected pending view {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the add is rejected as empty")]
fn add_is_rejected_as_empty(world: &TodoListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result"))?;

    if !matches!(result, Err(TaskDomainError::EmptyDescription)) {
        return Err(eyre::eyre!("expected EmptyDescription error, got {result:?}"));
    }
    Ok(())
}

#[then("the list holds {count:usize} tasks")]
fn list_holds_tasks(world: &TodoListWorld, count: usize) -> Result<(), eyre::Report> {
    let total = world.store.statistics().total;
    if total != count {
        return Err(eyre::eyre!("expected {count} tasks, found {total}"));
    }
    Ok(())
}

#[then(r#"the progress reads "{expected}""#)]
fn progress_reads(world: &TodoListWorld, expected: String) -> Result<(), eyre::Report> {
    let progress = world
        .store
        .statistics()
        .progress
        .ok_or_else(|| eyre::eyre!("progress missing for a non-empty list"))?;
    if progress.to_string() != expected {
        return Err(eyre::eyre!("expected progress {expected}, found {progress}"));
    }
    Ok(())
}
