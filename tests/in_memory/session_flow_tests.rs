//! Shell-style flows: mutate a session's store, then read the views back.

use super::helpers::{add_task, descriptions, registry};
use eyre::{OptionExt, ensure};
use rstest::rstest;
use todo_core::todo::{
    domain::{Priority, TaskList},
    store::AddTaskRequest,
};

#[rstest]
fn full_session_flow() -> eyre::Result<()> {
    let mut sessions = registry();
    let session_id = sessions.open();
    let store = sessions
        .get_mut(session_id)
        .ok_or_eyre("session store missing")?;

    let groceries = add_task(store, "Buy groceries", Priority::Medium)?;
    let taxes = add_task(store, "File taxes", Priority::High)?;
    let plants = add_task(store, "Repot plants", Priority::Low)?;
    ensure!(
        descriptions(store.pending_by_priority()) == ["File taxes", "Buy groceries", "Repot plants"]
    );

    store.complete(taxes);
    store.complete(groceries);
    ensure!(descriptions(store.recent_completed()) == ["Buy groceries", "File taxes"]);

    let stats = store.statistics();
    ensure!(stats.total == 3 && stats.pending == 1 && stats.completed == 2);
    ensure!(stats.progress.map(|p| p.to_string()).as_deref() == Some("66.7%"));

    store.delete(plants, TaskList::Pending);
    store.clear_completed();
    ensure!(store.is_empty());
    ensure!(store.statistics().progress.is_none());
    Ok(())
}

#[rstest]
fn whitespace_only_add_is_rejected_by_core() -> eyre::Result<()> {
    let mut sessions = registry();
    let session_id = sessions.open();
    let store = sessions
        .get_mut(session_id)
        .ok_or_eyre("session store missing")?;

    let result = store.add(AddTaskRequest::new("   "));

    ensure!(result.is_err());
    ensure!(store.statistics().total == 0);
    Ok(())
}

#[rstest]
fn completed_task_cannot_be_deleted_from_pending() -> eyre::Result<()> {
    let mut sessions = registry();
    let session_id = sessions.open();
    let store = sessions
        .get_mut(session_id)
        .ok_or_eyre("session store missing")?;
    let id = add_task(store, "Call plumber", Priority::High)?;
    store.complete(id);

    let removed = store.delete(id, TaskList::Pending);

    ensure!(removed == 0);
    ensure!(store.completed().len() == 1);
    ensure!(store.pending().iter().all(|task| task.id() != id));
    Ok(())
}

#[rstest]
fn closing_one_session_keeps_others() -> eyre::Result<()> {
    let mut sessions = registry();
    let first = sessions.open();
    let second = sessions.open();
    add_task(
        sessions.get_mut(second).ok_or_eyre("second session missing")?,
        "Survives",
        Priority::Medium,
    )?;

    sessions.close(first);

    let store = sessions.get(second).ok_or_eyre("second session missing")?;
    ensure!(descriptions(store.pending()) == ["Survives"]);
    Ok(())
}
