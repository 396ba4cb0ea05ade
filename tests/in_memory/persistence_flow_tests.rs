//! Checkpoint and resume through the in-memory snapshot repository.

use std::sync::Arc;

use super::helpers::{add_task, descriptions, registry};
use eyre::OptionExt;
use mockable::DefaultClock;
use rstest::rstest;
use todo_core::todo::{
    adapters::memory::InMemorySnapshotRepository, config::TaskStoreConfig, domain::Priority,
    services::SessionPersistenceService,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_survives_close_and_resume() -> eyre::Result<()> {
    let service = SessionPersistenceService::new(
        Arc::new(InMemorySnapshotRepository::new()),
        Arc::new(DefaultClock),
        TaskStoreConfig::default(),
    );
    let mut sessions = registry();
    let session_id = sessions.open();
    {
        let store = sessions
            .get_mut(session_id)
            .ok_or_eyre("session store missing")?;
        let done = add_task(store, "Finish slides", Priority::High)?;
        add_task(store, "Rehearse talk", Priority::Medium)?;
        store.complete(done);
    }
    let closed = sessions.close(session_id).ok_or_eyre("session should close")?;
    service.checkpoint(session_id, &closed).await?;

    let resumed = service.resume(session_id).await?;
    sessions.insert(session_id, resumed);

    let store = sessions
        .get(session_id)
        .ok_or_eyre("resumed session missing")?;
    eyre::ensure!(descriptions(store.pending()) == ["Rehearse talk"]);
    eyre::ensure!(descriptions(store.completed()) == ["Finish slides"]);
    Ok(())
}
