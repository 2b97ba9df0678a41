//! Spawn timers — drip-feeds barrier pairs and bonuses in from the right
//! edge of the playfield.
//!
//! Each population has its own countdown, decremented by
//! `elapsed_ms * current_speed` so the world gets denser as the game speeds
//! up. A timer going negative triggers a spawn only while the population is
//! at or below its cap, then resets to a randomized interval around the base
//! delay.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use driftline_core::constants::{
    BARRIER_GAP, BARRIER_HEIGHT, BARRIER_SPAWN_DELAY_MS, BONUS_SPAWN_DELAY_MS, MAX_NUM_BARRIERS,
    MAX_NUM_BONUSES, SPAWN_MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use driftline_core::registry::Registry;
use driftline_core::render::MeshProvider;

use crate::world_setup;

/// Run both spawn timers for one frame.
#[allow(clippy::too_many_arguments)]
pub fn run(
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    meshes: &mut dyn MeshProvider,
    current_speed: f32,
    elapsed_ms: f32,
    next_barrier_spawn: &mut f32,
    next_bonus_spawn: &mut f32,
) {
    *next_barrier_spawn -= elapsed_ms * current_speed;
    if registry.deadlys.len() <= MAX_NUM_BARRIERS && *next_barrier_spawn < 0.0 {
        // Jitter the next interval by up to ±25% around the base delay.
        *next_barrier_spawn = BARRIER_SPAWN_DELAY_MS * (1.0 + (rng.gen::<f32>() - 0.5) / 2.0);

        // A wall pair framing a randomized gap in the upper half.
        let gap_center = rng.gen::<f32>() * WINDOW_HEIGHT * 0.5;
        let spawn_x = WINDOW_WIDTH + SPAWN_MARGIN;
        world_setup::create_barrier(
            registry,
            meshes,
            Vec2::new(spawn_x, gap_center - BARRIER_HEIGHT / 2.0),
        );
        world_setup::create_barrier(
            registry,
            meshes,
            Vec2::new(spawn_x, gap_center + BARRIER_GAP + BARRIER_HEIGHT / 2.0),
        );
    }

    *next_bonus_spawn -= elapsed_ms * current_speed;
    if registry.eatables.len() <= MAX_NUM_BONUSES && *next_bonus_spawn < 0.0 {
        // Between half and the full base delay.
        *next_bonus_spawn =
            BONUS_SPAWN_DELAY_MS / 2.0 + rng.gen::<f32>() * (BONUS_SPAWN_DELAY_MS / 2.0);

        world_setup::create_bonus(
            registry,
            meshes,
            Vec2::new(
                WINDOW_WIDTH + SPAWN_MARGIN,
                rng.gen::<f32>() * WINDOW_HEIGHT,
            ),
            rng.gen::<f32>() * TAU,
        );
    }
}
