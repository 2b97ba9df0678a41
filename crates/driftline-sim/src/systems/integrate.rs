//! Motion integration system.
//!
//! Advances every entity's position by velocity × elapsed time, scaled by a
//! multiplier that grows with score — obstacles and pickups accelerate along
//! with the player as points accumulate. Runs once per frame, before
//! collision detection.

use driftline_core::registry::Registry;
use driftline_core::state::GameState;

/// Integrate all motions for one frame.
pub fn run(registry: &mut Registry, state: &GameState, growth_factor: f32, elapsed_ms: f32) {
    let step_seconds = elapsed_ms / 1000.0;
    let multiplier = state.speed_multiplier(growth_factor);
    for (_entity, motion) in registry.motions.iter_mut() {
        motion.position += motion.velocity * step_seconds * multiplier;
    }
}
