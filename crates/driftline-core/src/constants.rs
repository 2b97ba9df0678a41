//! Simulation constants and tuning parameters.

// --- Playfield ---

/// Playfield width in world units (matches the window's pixel size).
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Playfield height in world units.
pub const WINDOW_HEIGHT: f32 = 720.0;

/// How far past the right edge new entities spawn.
pub const SPAWN_MARGIN: f32 = 200.0;

// --- Bounding boxes (sprite dimensions scaled to gameplay size) ---

pub const CAR_WIDTH: f32 = 1.5 * 71.0;
pub const CAR_HEIGHT: f32 = 1.5 * 116.0;

pub const BARRIER_WIDTH: f32 = 2.0 * 62.0;
pub const BARRIER_HEIGHT: f32 = 2.0 * 210.0;

pub const BONUS_WIDTH: f32 = 1.7 * 70.0;
pub const BONUS_HEIGHT: f32 = 1.7 * 48.0;

pub const TITLE_WIDTH: f32 = 1.5 * 396.0;
pub const TITLE_HEIGHT: f32 = 1.5 * 60.0;

// --- Speeds ---

/// Leftward scroll velocity shared by barriers, bonuses, and the title.
pub const BARRIER_SPEED: f32 = -400.0;

/// Player car speed cap (units per second).
pub const CAR_SPEED: f32 = 400.0;

/// Per-point growth applied to both the integration multiplier and the
/// global spawn-clock speed. The game speeds up monotonically with score.
pub const SPEED_GROWTH_FACTOR: f32 = 1.05;

// --- Spawning ---

/// Maximum simultaneous barrier entities before spawning pauses.
pub const MAX_NUM_BARRIERS: usize = 7;

/// Maximum simultaneous bonus entities before spawning pauses.
pub const MAX_NUM_BONUSES: usize = 5;

/// Base delay between barrier-pair spawns (milliseconds).
pub const BARRIER_SPAWN_DELAY_MS: f32 = 500.0 * 3.0;

/// Base delay between bonus spawns (milliseconds).
pub const BONUS_SPAWN_DELAY_MS: f32 = 750.0 * 3.0;

/// Vertical gap left between the two barriers of a spawned pair.
pub const BARRIER_GAP: f32 = 350.0;

/// Angle barriers are tilted at when spawned.
pub const BARRIER_ANGLE: f32 = 3.0 * std::f32::consts::FRAC_PI_2 / 4.0;

// --- Timers ---

/// Death countdown before the game restarts (milliseconds). Also the
/// baseline for the screen-darkening factor.
pub const DEATH_DURATION_MS: f32 = 3000.0;

/// Lit-up duration after scoring (milliseconds).
pub const LIGHT_UP_DURATION_MS: f32 = 1000.0;

// --- Drift model ---

/// Below this speed a velocity axis snaps to zero instead of decaying.
pub const DRIFT_STOP_THRESHOLD: f32 = 7.0;

/// Viscosity constant for drag perpendicular to the heading.
pub const DRIFT_NORMAL_VISCOSITY: f32 = 0.00085;

/// Viscosity constant for drag along the heading.
pub const DRIFT_INLINE_VISCOSITY: f32 = 0.00045;

// --- Steering ---

/// Time constant for smoothed steering toward the mouse (milliseconds).
pub const STEER_SMOOTHING_MS: f32 = 100.0;

/// Angular dead zone below which the steering target is left alone.
pub const STEER_DEAD_ZONE: f32 = 0.01;

// --- Cleanup ---

/// Eatables overlapping a barrier beyond this x coordinate are destroyed
/// (off-screen straggler rule).
pub const EATABLE_CLEANUP_X: f32 = WINDOW_WIDTH;
