//! Adapter implementations for the snapshot repository port.
//!
//! - [`memory::InMemorySnapshotRepository`]: thread-safe in-memory storage
//!   for tests and short-lived shells
//! - [`file::FileSnapshotRepository`]: one JSON document per session under a
//!   root directory

pub mod file;
pub mod memory;
