//! Systems that operate on the simulation world each frame.
//!
//! Systems are free functions over the registry (plus whatever engine state
//! they need). They do not own state; ordering is the engine's job.

pub mod collision;
pub mod drift;
pub mod handling;
pub mod integrate;
pub mod lifecycle;
pub mod resolve;
pub mod snapshot;
pub mod spawner;
