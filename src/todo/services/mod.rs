//! Application services for the to-do list.

mod persistence;

pub use persistence::{
    SessionPersistenceError, SessionPersistenceResult, SessionPersistenceService,
};
