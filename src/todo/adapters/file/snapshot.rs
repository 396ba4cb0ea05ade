//! JSON file snapshot repository.
//!
//! Each session is stored as `<session-id>.json` inside a root directory.
//! Writes land in a uniquely named temporary sibling first and are renamed
//! into place, so a crash mid-write leaves the previous snapshot intact and
//! overlapping saves for one session never share a temp file. The last rename
//! wins.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use tracing::{debug, info};
use uuid::Uuid;

use crate::todo::{
    ports::{SnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
    session::SessionId,
    snapshot::TaskStoreSnapshot,
};

/// Snapshot repository backed by one JSON document per session.
#[derive(Debug, Clone)]
pub struct FileSnapshotRepository {
    root: Utf8PathBuf,
}

impl FileSnapshotRepository {
    /// Opens a repository rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an IO error when the directory cannot be created.
    pub fn open(root: impl Into<Utf8PathBuf>) -> io::Result<Self> {
        let root_path: Utf8PathBuf = root.into();
        Dir::create_ambient_dir_all(&root_path, ambient_authority())?;
        info!(root = %root_path, "snapshot directory ready");
        Ok(Self { root: root_path })
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Runs a filesystem operation against the root directory off the async
    /// executor.
    async fn with_root<T, F>(&self, operation: F) -> SnapshotRepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> io::Result<T> + Send + 'static,
    {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || {
            let dir = Dir::open_ambient_dir(&root, ambient_authority())?;
            operation(&dir)
        })
        .await
        .map_err(SnapshotRepositoryError::persistence)?
        .map_err(SnapshotRepositoryError::persistence)
    }
}

fn snapshot_file_name(session_id: SessionId) -> String {
    format!("{session_id}.json")
}

fn temp_file_name(session_id: SessionId) -> String {
    format!("{session_id}.{}.json.tmp", Uuid::new_v4())
}

#[async_trait]
impl SnapshotRepository for FileSnapshotRepository {
    async fn save(
        &self,
        session_id: SessionId,
        snapshot: &TaskStoreSnapshot,
    ) -> SnapshotRepositoryResult<()> {
        let encoded = serde_json::to_vec_pretty(snapshot)?;
        let bytes = encoded.len();
        self.with_root(move |dir| {
            let temp_name = temp_file_name(session_id);
            dir.write(&temp_name, encoded)?;
            dir.rename(&temp_name, dir, snapshot_file_name(session_id))
        })
        .await?;
        debug!(%session_id, bytes, "snapshot written");
        Ok(())
    }

    async fn load(
        &self,
        session_id: SessionId,
    ) -> SnapshotRepositoryResult<Option<TaskStoreSnapshot>> {
        let stored = self
            .with_root(move |dir| match dir.read_to_string(snapshot_file_name(session_id)) {
                Ok(contents) => Ok(Some(contents)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err),
            })
            .await?;

        let Some(contents) = stored else {
            return Ok(None);
        };
        let snapshot = serde_json::from_str(&contents)?;
        debug!(%session_id, "snapshot read");
        Ok(Some(snapshot))
    }

    async fn remove(&self, session_id: SessionId) -> SnapshotRepositoryResult<bool> {
        self.with_root(move |dir| match dir.remove_file(snapshot_file_name(session_id)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        })
        .await
    }
}
