//! Drift model — anisotropic drag for the player car, advanced mode only.
//!
//! The current velocity is decomposed against the car's heading axis and its
//! normal; each component decays under a Stokes-style drag and the results
//! are recombined along the original axes. Because the drag constants differ
//! between the two axes, sideways momentum bleeds off faster than forward
//! momentum, which reads as a skid.
//!
//! Skipped entirely while the player has a death timer.

use std::f32::consts::PI;

use driftline_core::components::Motion;
use driftline_core::constants::{
    DRIFT_INLINE_VISCOSITY, DRIFT_NORMAL_VISCOSITY, DRIFT_STOP_THRESHOLD,
};

/// Apply one frame of drag to the player's motion.
pub fn run(motion: &mut Motion, elapsed_ms: f32) {
    let (sin_angle, cos_angle) = motion.angle.sin_cos();
    let velocity = motion.velocity;

    let inline_component = -velocity.x * cos_angle - velocity.y * sin_angle;
    let normal_component = -velocity.x * sin_angle - velocity.y * cos_angle;

    // Stokes' law: F_d = 6π · size · viscosity · v, and the velocity change
    // over the frame is F_d · t. Normal drag scales with the car's width,
    // inline drag with its length (negative: the mirrored scale flips sign).
    let normal_drag = 6.0 * PI * DRIFT_NORMAL_VISCOSITY * motion.scale.x;
    let inline_drag = -6.0 * PI * DRIFT_INLINE_VISCOSITY * motion.scale.y;

    let step_seconds = elapsed_ms / 1000.0;
    let drag_x = (normal_component * normal_drag * sin_angle
        + inline_component * inline_drag * cos_angle)
        * step_seconds;
    let drag_y = (normal_component * normal_drag * cos_angle
        + inline_component * inline_drag * sin_angle)
        * step_seconds;

    apply_axis(&mut motion.velocity.x, drag_x);
    apply_axis(&mut motion.velocity.y, drag_y);
}

/// Apply drag along one world axis, snapping to rest below the stop
/// threshold instead of decaying asymptotically forever.
fn apply_axis(velocity: &mut f32, drag: f32) {
    if velocity.abs() > DRIFT_STOP_THRESHOLD && velocity.abs() >= drag.abs() {
        *velocity += drag;
    } else {
        *velocity = 0.0;
    }
}
