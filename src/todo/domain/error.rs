//! Error types for to-do domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task has already moved to the completed list.
    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),

    /// The store has handed out every representable identifier.
    #[error("task identifier space exhausted")]
    IdSpaceExhausted,
}

/// Error returned while parsing a priority from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
