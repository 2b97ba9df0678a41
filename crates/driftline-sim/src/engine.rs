//! The simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the component registry, the game-state context,
//! the input maps, and the seeded RNG. An external frame pump calls
//! `step(elapsed_ms)` once per frame; within one frame, integration strictly
//! precedes collision detection, which strictly precedes resolution.
//! Single-threaded and headless, enabling deterministic testing.

use std::f32::consts::PI;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use driftline_core::constants::{DEATH_DURATION_MS, SPEED_GROWTH_FACTOR, WINDOW_HEIGHT, WINDOW_WIDTH};
use driftline_core::enums::MouseButton;
use driftline_core::events::AudioEvent;
use driftline_core::input::{InputIntent, InputState};
use driftline_core::registry::Registry;
use driftline_core::render::{MeshProvider, NullMeshProvider};
use driftline_core::snapshot::SceneSnapshot;
use driftline_core::state::GameState;
use driftline_ecs::Entity;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Per-point growth applied to speed and spawn pacing.
    pub growth_factor: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            growth_factor: SPEED_GROWTH_FACTOR,
        }
    }
}

/// The simulation engine. Owns the registry and all per-run state.
pub struct SimulationEngine {
    registry: Registry,
    state: GameState,
    input: InputState,
    rng: ChaCha8Rng,
    meshes: Box<dyn MeshProvider>,
    growth_factor: f32,
    next_barrier_spawn: f32,
    next_bonus_spawn: f32,
    player: Entity,
    title: Entity,
    /// Steering target for the smoothed advanced-mode rotation.
    target_angle: f32,
    audio_events: Vec<AudioEvent>,
    running: bool,
}

impl SimulationEngine {
    /// Create a headless engine (no render collaborator).
    pub fn new(config: SimConfig) -> Self {
        Self::with_mesh_provider(config, Box::new(NullMeshProvider))
    }

    /// Create an engine wired to the embedding app's mesh collaborator.
    pub fn with_mesh_provider(config: SimConfig, meshes: Box<dyn MeshProvider>) -> Self {
        let mut engine = Self {
            registry: Registry::new(),
            state: GameState::default(),
            input: InputState::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            meshes,
            growth_factor: config.growth_factor,
            next_barrier_spawn: 0.0,
            next_bonus_spawn: 0.0,
            player: Entity::from_raw(u32::MAX),
            title: Entity::from_raw(u32::MAX),
            target_angle: PI,
            audio_events: Vec::new(),
            running: true,
        };
        engine.restart();
        engine
    }

    /// Advance the simulation by one frame. Returns `false` once the owning
    /// loop should stop, `true` otherwise.
    pub fn step(&mut self, elapsed_ms: f32) -> bool {
        if !self.running {
            return false;
        }

        // Last frame's debug helpers and anything fully off the left edge.
        systems::lifecycle::clear_debug_shapes(&mut self.registry);
        systems::lifecycle::despawn_offscreen(&mut self.registry);

        systems::spawner::run(
            &mut self.registry,
            &mut self.rng,
            self.meshes.as_mut(),
            self.state.current_speed,
            elapsed_ms,
            &mut self.next_barrier_spawn,
            &mut self.next_bonus_spawn,
        );

        // Death and light-up countdowns. An expired death timer ends the
        // frame early with a full restart.
        let timers = systems::lifecycle::tick_timers(&mut self.registry, elapsed_ms);
        if timers.restart_pending {
            self.restart();
            return self.running;
        }
        self.state.darken_screen_factor =
            (1.0 - timers.min_remaining_ms / DEATH_DURATION_MS).clamp(0.0, 1.0);

        // Player control, then physics. The order below is load-bearing:
        // resolution depends on post-integration positions, and detection
        // and resolution must read the same positions.
        if self.state.advanced {
            systems::handling::advanced(
                &mut self.registry,
                &self.input,
                self.player,
                &mut self.target_angle,
                elapsed_ms,
            );
        } else {
            systems::handling::basic(&mut self.registry, &self.input, self.player);
        }

        systems::integrate::run(&mut self.registry, &self.state, self.growth_factor, elapsed_ms);

        assert_eq!(self.registry.players.len(), 1, "exactly one player must be alive");
        if self.state.advanced && !self.registry.death_timers.has(self.player) {
            systems::drift::run(self.registry.motions.get_mut(self.player), elapsed_ms);
        }

        systems::collision::run(&mut self.registry);
        systems::resolve::run(
            &mut self.registry,
            &mut self.state,
            self.growth_factor,
            &mut self.audio_events,
        );

        if self.state.debug_overlay {
            self.spawn_debug_overlay();
        }

        self.running
    }

    /// Reset the world to its initial state: fresh game state, no entities
    /// but the title banner and a new player car.
    pub fn restart(&mut self) {
        self.registry.log_component_counts();
        log::info!("restarting run");

        self.state.reset();
        self.audio_events.push(AudioEvent::MusicResumed);

        // Remove every entity we created (everything that moves has a Motion).
        while let Some(&entity) = self.registry.motions.entities().last() {
            self.registry.remove_all_components_of(entity);
        }

        self.title = world_setup::create_title(
            &mut self.registry,
            self.meshes.as_mut(),
            Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 3.0),
        );
        self.player = world_setup::create_player(
            &mut self.registry,
            self.meshes.as_mut(),
            Vec2::new(WINDOW_WIDTH / 4.0, 2.0 * WINDOW_HEIGHT / 3.0),
        );
        self.target_angle = PI;
    }

    /// Build this frame's scene snapshot, draining the audio event buffer.
    pub fn snapshot(&mut self) -> SceneSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(&self.registry, &self.state, audio_events)
    }

    // --- Input mutators (called by the windowing layer) ---

    /// Mark an intent as held.
    pub fn press_key(&mut self, intent: InputIntent) {
        if intent == InputIntent::DebugOverlay {
            self.state.debug_overlay = true;
        }
        self.input.press(intent);
    }

    /// Mark an intent as released; release edges carry the one-shot actions.
    pub fn release_key(&mut self, intent: InputIntent) {
        self.input.release(intent);
        match intent {
            InputIntent::Restart => self.restart(),
            InputIntent::ToggleMode => {
                self.state.toggle_mode();
                log::info!(
                    "{} mode",
                    if self.state.advanced { "advanced" } else { "basic" }
                );
            }
            InputIntent::Quit => self.running = false,
            InputIntent::DebugOverlay => self.state.debug_overlay = false,
            InputIntent::SpeedUp => {
                self.state.current_speed += 0.1;
                log::debug!("current speed = {}", self.state.current_speed);
            }
            InputIntent::SpeedDown => {
                self.state.current_speed = (self.state.current_speed - 0.1).max(0.0);
                log::debug!("current speed = {}", self.state.current_speed);
            }
            _ => {}
        }
    }

    /// Mark a mouse button as held.
    pub fn click_button(&mut self, button: MouseButton) {
        self.input.click(button);
    }

    /// Mark a mouse button as released.
    pub fn release_button(&mut self, button: MouseButton) {
        self.input.release_button(button);
    }

    /// Record the latest cursor position.
    pub fn set_mouse_position(&mut self, position: Vec2) {
        self.input.set_mouse_position(position);
    }

    // --- Accessors ---

    /// Whether the frame loop should stop.
    pub fn is_over(&self) -> bool {
        !self.running
    }

    /// Read-only view of the component registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable registry access for the embedding app and tests.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The current game-state context.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable game-state access (for tests that need a scripted state).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The live player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// The title banner entity spawned by the last restart.
    pub fn title(&self) -> Entity {
        self.title
    }

    /// Drain the pending audio events without building a snapshot.
    pub fn take_audio_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    /// One bounding-box rectangle per live entity, rebuilt every frame while
    /// the debug overlay is held.
    fn spawn_debug_overlay(&mut self) {
        let boxes: Vec<(Vec2, Vec2)> = self
            .registry
            .motions
            .iter()
            .filter(|(entity, _)| !self.registry.debug_shapes.has(*entity))
            .map(|(_, motion)| (motion.position, motion.scale))
            .collect();
        for (position, scale) in boxes {
            world_setup::create_debug_line(&mut self.registry, position, scale);
        }
    }
}
