//! `todo-core`: the state machine behind a single-user to-do list.
//!
//! The crate owns two task lists per session, pending and completed, and the
//! four mutations that move tasks between them: add, complete, delete, and
//! clear completed. Presentation shells (a web page, a REST handler, a test
//! harness) call a mutation and then read the lists and statistics back to
//! redraw; the core never renders anything itself.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: task values and lifecycle rules with no infrastructure
//!   dependencies
//! - **Ports**: abstract trait interfaces for snapshot persistence
//! - **Adapters**: in-memory and file-backed implementations of those ports
//!
//! # Modules
//!
//! - [`todo`]: task store, sessions, snapshots, and persistence

pub mod todo;
