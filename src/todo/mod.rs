//! Single-session to-do list core.
//!
//! A [`store::TaskStore`] owns the pending and completed task lists of one
//! session and is the only thing that mutates them. Presentation shells call
//! a mutation, then read the lists and statistics back to redraw. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The store, its configuration, and session ownership in [`store`],
//!   [`config`], and [`session`]
//! - Snapshot images in [`snapshot`], persisted through [`ports`] by
//!   [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod session;
pub mod snapshot;
pub mod store;
