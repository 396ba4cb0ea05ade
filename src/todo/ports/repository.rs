//! Repository port for saving and loading per-session store snapshots.

use crate::todo::{session::SessionId, snapshot::TaskStoreSnapshot};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot repository operations.
pub type SnapshotRepositoryResult<T> = Result<T, SnapshotRepositoryError>;

/// Snapshot persistence contract.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Stores the snapshot for a session, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError`] when the snapshot cannot be
    /// encoded or written.
    async fn save(
        &self,
        session_id: SessionId,
        snapshot: &TaskStoreSnapshot,
    ) -> SnapshotRepositoryResult<()>;

    /// Loads the latest snapshot for a session.
    ///
    /// Returns `None` when nothing has been saved for the session.
    async fn load(&self, session_id: SessionId)
    -> SnapshotRepositoryResult<Option<TaskStoreSnapshot>>;

    /// Removes the saved snapshot for a session.
    ///
    /// Returns `false` when there was nothing to remove.
    async fn remove(&self, session_id: SessionId) -> SnapshotRepositoryResult<bool>;
}

/// Errors returned by snapshot repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotRepositoryError {
    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<serde_json::Error> for SnapshotRepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
