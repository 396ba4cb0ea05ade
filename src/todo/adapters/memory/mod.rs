//! In-memory adapters.

mod snapshot;

pub use snapshot::InMemorySnapshotRepository;
