//! In-memory snapshot repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    ports::{SnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
    session::SessionId,
    snapshot::TaskStoreSnapshot,
};

/// Thread-safe in-memory snapshot repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    snapshots: Arc<RwLock<HashMap<SessionId, TaskStoreSnapshot>>>,
}

impl InMemorySnapshotRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> SnapshotRepositoryError {
    SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn save(
        &self,
        session_id: SessionId,
        snapshot: &TaskStoreSnapshot,
    ) -> SnapshotRepositoryResult<()> {
        let mut snapshots = self.snapshots.write().map_err(lock_error)?;
        snapshots.insert(session_id, snapshot.clone());
        Ok(())
    }

    async fn load(
        &self,
        session_id: SessionId,
    ) -> SnapshotRepositoryResult<Option<TaskStoreSnapshot>> {
        let snapshots = self.snapshots.read().map_err(lock_error)?;
        Ok(snapshots.get(&session_id).cloned())
    }

    async fn remove(&self, session_id: SessionId) -> SnapshotRepositoryResult<bool> {
        let mut snapshots = self.snapshots.write().map_err(lock_error)?;
        Ok(snapshots.remove(&session_id).is_some())
    }
}
