//! Port contracts for the to-do list.
//!
//! Ports define infrastructure-agnostic interfaces used by services.

pub mod repository;

pub use repository::{SnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult};
