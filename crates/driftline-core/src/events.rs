//! Events emitted by the simulation for the embedding app's sound system.

use serde::{Deserialize, Serialize};

/// Audio cues the embedding application is expected to honor; the core
/// never touches an audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// The player hit an obstacle.
    CarCrash,
    /// The player consumed a bonus.
    PointScored,
    /// The death sequence started; background music should pause.
    MusicPaused,
    /// The game (re)started; background music should resume.
    MusicResumed,
}
