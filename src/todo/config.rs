//! Store configuration.
//!
//! Configuration is plain data with defaults matching the classic behaviour
//! of the list: new tasks default to medium priority and the completed view
//! shows the ten most recent completions.

use super::domain::{ParsePriorityError, Priority};
use serde::Deserialize;
use thiserror::Error;

/// Default number of completed tasks shown in the recent view.
pub const DEFAULT_RECENT_COMPLETED_LIMIT: usize = 10;

/// Errors returned while loading a [`TaskStoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has the wrong shape.
    #[error("invalid configuration document: {0}")]
    Format(#[from] toml::de::Error),

    /// The default priority is not a known level.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),

    /// The recent completed view must show at least one task.
    #[error("recent_completed_limit must be positive, got {0}")]
    InvalidRecentCompletedLimit(usize),
}

/// Tunables for a [`crate::todo::store::TaskStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Priority applied when an add request does not name one.
    pub default_priority: Priority,
    /// Maximum number of tasks returned by the recent completed view.
    pub recent_completed_limit: usize,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::Medium,
            recent_completed_limit: DEFAULT_RECENT_COMPLETED_LIMIT,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTaskStoreConfig {
    default_priority: Option<String>,
    recent_completed_limit: Option<usize>,
}

impl TaskStoreConfig {
    /// Sets the default priority.
    #[must_use]
    pub const fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    /// Sets the recent completed view limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRecentCompletedLimit`] when `limit` is
    /// zero.
    pub const fn with_recent_completed_limit(mut self, limit: usize) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::InvalidRecentCompletedLimit(limit));
        }
        self.recent_completed_limit = limit;
        Ok(self)
    }

    /// Parses configuration from a TOML document.
    ///
    /// Missing keys keep their defaults. The priority name is matched
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed, names an
    /// unknown priority, or sets a zero view limit.
    ///
    /// # Examples
    ///
    ///     use todo_core::todo::{config::TaskStoreConfig, domain::Priority};
    ///
    ///     let config = TaskStoreConfig::from_toml_str("default_priority = \"High\"")
    ///         .expect("valid config");
    ///     assert_eq!(config.default_priority, Priority::High);
    ///     assert_eq!(config.recent_completed_limit, 10);
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let raw: RawTaskStoreConfig = toml::from_str(document)?;
        let mut config = Self::default();
        if let Some(priority) = raw.default_priority {
            config = config.with_default_priority(Priority::try_from(priority.as_str())?);
        }
        if let Some(limit) = raw.recent_completed_limit {
            config = config.with_recent_completed_limit(limit)?;
        }
        Ok(config)
    }
}
