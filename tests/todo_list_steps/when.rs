//! When steps for to-do list BDD scenarios.

use super::world::TodoListWorld;
use rstest_bdd_macros::when;
use todo_core::todo::domain::TaskList;

#[when(r#"a task "{description}" with priority "{priority}" is added"#)]
fn task_is_added(
    world: &mut TodoListWorld,
    description: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let result = world.add(&description, &priority)?;
    world.last_add_result = Some(result);
    Ok(())
}

#[when(r#"the task "{description}" is completed"#)]
fn task_is_completed(world: &mut TodoListWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&description)?;
    world.store.complete(id);
    Ok(())
}

#[when(r#"the pending task "{description}" is deleted"#)]
fn pending_task_is_deleted(
    world: &mut TodoListWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&description)?;
    world.store.delete(id, TaskList::Pending);
    Ok(())
}

#[when("the completed tasks are cleared")]
fn completed_tasks_are_cleared(world: &mut TodoListWorld) {
    world.store.clear_completed();
}
