//! Service layer for checkpointing and resuming session stores.

use crate::todo::{
    config::TaskStoreConfig,
    ports::{SnapshotRepository, SnapshotRepositoryError},
    session::SessionId,
    snapshot::SnapshotError,
    store::TaskStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for session persistence.
#[derive(Debug, Error)]
pub enum SessionPersistenceError {
    /// The stored snapshot violates a store invariant.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SnapshotRepositoryError),
}

/// Result type for session persistence operations.
pub type SessionPersistenceResult<T> = Result<T, SessionPersistenceError>;

/// Saves and restores per-session task stores through a repository.
#[derive(Clone)]
pub struct SessionPersistenceService<R, C>
where
    R: SnapshotRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TaskStoreConfig,
}

impl<R, C> SessionPersistenceService<R, C>
where
    R: SnapshotRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new persistence service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, config: TaskStoreConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Saves the current state of a session's store.
    ///
    /// # Errors
    ///
    /// Returns [`SessionPersistenceError::Repository`] when the snapshot
    /// cannot be written.
    pub async fn checkpoint(
        &self,
        session_id: SessionId,
        store: &TaskStore<C>,
    ) -> SessionPersistenceResult<()> {
        let snapshot = store.snapshot();
        let tasks = snapshot.len();
        self.repository.save(session_id, &snapshot).await?;
        info!(%session_id, tasks, "session checkpointed");
        Ok(())
    }

    /// Restores a session's store, or starts an empty one when nothing was
    /// saved.
    ///
    /// # Errors
    ///
    /// Returns [`SessionPersistenceError::Repository`] when loading fails and
    /// [`SessionPersistenceError::Snapshot`] when the saved snapshot is
    /// inconsistent.
    pub async fn resume(&self, session_id: SessionId) -> SessionPersistenceResult<TaskStore<C>> {
        let Some(snapshot) = self.repository.load(session_id).await? else {
            info!(%session_id, "no saved snapshot, starting empty store");
            return Ok(TaskStore::with_config(Arc::clone(&self.clock), self.config));
        };

        let store = TaskStore::restore(snapshot, Arc::clone(&self.clock), self.config)
            .inspect_err(|err| warn!(%session_id, error = %err, "saved snapshot rejected"))?;
        info!(%session_id, "session resumed");
        Ok(store)
    }

    /// Deletes a session's saved snapshot.
    ///
    /// Returns `false` when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns [`SessionPersistenceError::Repository`] when removal fails.
    pub async fn discard(&self, session_id: SessionId) -> SessionPersistenceResult<bool> {
        Ok(self.repository.remove(session_id).await?)
    }
}
