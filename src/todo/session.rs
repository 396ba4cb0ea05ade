//! Per-session store ownership.
//!
//! Each session owns exactly one [`TaskStore`]. Handlers look their store up
//! by [`SessionId`] and mutate it through `&mut`, so no store is ever shared
//! between sessions.

use super::{config::TaskStoreConfig, store::TaskStore};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Unique identifier for a user session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner of one task store per open session.
pub struct SessionRegistry<C>
where
    C: Clock,
{
    sessions: HashMap<SessionId, TaskStore<C>>,
    clock: Arc<C>,
    config: TaskStoreConfig,
}

impl<C> SessionRegistry<C>
where
    C: Clock,
{
    /// Creates an empty registry whose new stores use `clock` and `config`.
    #[must_use]
    pub fn new(clock: Arc<C>, config: TaskStoreConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            clock,
            config,
        }
    }

    /// Opens a new session backed by an empty store.
    pub fn open(&mut self) -> SessionId {
        let session_id = SessionId::new();
        let store = TaskStore::with_config(Arc::clone(&self.clock), self.config);
        self.sessions.insert(session_id, store);
        info!(%session_id, "session opened");
        session_id
    }

    /// Attaches an existing store, typically one resumed from a snapshot.
    ///
    /// Returns the store previously held by the session, if any.
    pub fn insert(&mut self, session_id: SessionId, store: TaskStore<C>) -> Option<TaskStore<C>> {
        info!(%session_id, "session attached");
        self.sessions.insert(session_id, store)
    }

    /// Returns the store for a session.
    #[must_use]
    pub fn get(&self, session_id: SessionId) -> Option<&TaskStore<C>> {
        self.sessions.get(&session_id)
    }

    /// Returns the store for a session for mutation.
    pub fn get_mut(&mut self, session_id: SessionId) -> Option<&mut TaskStore<C>> {
        self.sessions.get_mut(&session_id)
    }

    /// Closes a session, handing its store back to the caller.
    pub fn close(&mut self, session_id: SessionId) -> Option<TaskStore<C>> {
        let store = self.sessions.remove(&session_id);
        if store.is_some() {
            info!(%session_id, "session closed");
        }
        store
    }

    /// Returns the shared clock handed to new stores.
    #[must_use]
    pub const fn clock(&self) -> &Arc<C> {
        &self.clock
    }

    /// Returns the configuration handed to new stores.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Returns the number of open sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns whether no session is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
