//! Domain model for the to-do list.
//!
//! The domain holds the task value types and their lifecycle rules. Storage
//! ordering, identifier assignment, and persistence live outside it.

mod description;
mod error;
mod ids;
mod priority;
mod statistics;
mod task;

pub use description::TaskDescription;
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use statistics::{ProgressPercent, TaskStatistics};
pub use task::{PersistedTaskData, Task, TaskList, TaskStatus};
