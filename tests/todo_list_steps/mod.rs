//! Step definitions for to-do list BDD scenarios.

pub mod then;
pub mod when;
pub mod world;
