//! Simulation engine for DRIFTLINE.
//!
//! Owns the component registry, advances the world one `step(elapsed_ms)`
//! at a time from an external frame pump, and emits audio events and scene
//! snapshots for the embedding application. Completely headless (no window,
//! audio, or GPU dependency), enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use driftline_core as core;
pub use engine::{SimConfig, SimulationEngine};
