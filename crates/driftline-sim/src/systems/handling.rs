//! Player control — basic (direct velocity) and advanced (momentum +
//! smoothed steering) handling.
//!
//! Both routines are no-ops while the player has a death timer.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use driftline_core::constants::{CAR_SPEED, STEER_DEAD_ZONE, STEER_SMOOTHING_MS};
use driftline_core::enums::MouseButton;
use driftline_core::input::{InputIntent, InputState};
use driftline_core::math::{heading_vector, wrap_angle};
use driftline_core::registry::Registry;
use driftline_ecs::Entity;

/// Basic mode: direction intents set the velocity directly in the car's
/// local frame; releasing everything stops the car dead. The car always
/// aims straight at the cursor.
pub fn basic(registry: &mut Registry, input: &InputState, player: Entity) {
    if registry.death_timers.has(player) {
        return;
    }
    let mouse = input.mouse_position();
    let left = input.is_pressed(InputIntent::Left);
    let right = input.is_pressed(InputIntent::Right);
    let accelerate = input.is_pressed(InputIntent::Accelerate);
    let brake = input.is_pressed(InputIntent::Brake);

    let motion = registry.motions.get_mut(player);
    let heading = heading_vector(motion.angle);
    let normal = Vec2::new(-heading.y, heading.x);

    let mut velocity = Vec2::ZERO;
    if left {
        velocity = heading * CAR_SPEED;
    }
    if right {
        velocity = -heading * CAR_SPEED;
    }
    if accelerate {
        velocity = normal * CAR_SPEED;
    }
    if brake {
        velocity = -normal * CAR_SPEED;
    }
    motion.velocity = velocity;

    motion.angle = (motion.position.y - mouse.y).atan2(motion.position.x - mouse.x);
}

/// Advanced mode: the primary button (or the brake intent) decelerates the
/// car along its heading while the inline speed is under the cap, the total
/// speed is clamped to the car speed, and steering eases toward the cursor
/// over ~`STEER_SMOOTHING_MS`, taking the short way around ±π.
pub fn advanced(
    registry: &mut Registry,
    input: &InputState,
    player: Entity,
    target_angle: &mut f32,
    elapsed_ms: f32,
) {
    if registry.death_timers.has(player) {
        return;
    }
    let mouse = input.mouse_position();
    let braking =
        input.is_clicked(MouseButton::Primary) || input.is_pressed(InputIntent::Brake);

    let motion = registry.motions.get_mut(player);
    let heading = heading_vector(motion.angle);
    let inline_component = -motion.velocity.dot(heading);

    if braking && inline_component < CAR_SPEED {
        motion.velocity -= heading * elapsed_ms;
    }

    let speed = motion.velocity.length();
    if speed > CAR_SPEED {
        motion.velocity *= CAR_SPEED / speed;
    }

    let mouse_angle = (motion.position.y - mouse.y).atan2(motion.position.x - mouse.x);
    if (motion.angle - mouse_angle).abs() > STEER_DEAD_ZONE {
        *target_angle = mouse_angle;
    }
    if motion.angle != *target_angle {
        let blend = elapsed_ms / STEER_SMOOTHING_MS;
        // Cross the ±π seam through the short arc.
        if motion.angle > PI * 0.5 && *target_angle < PI * -0.5 {
            motion.angle += (*target_angle + TAU - motion.angle) * blend;
        } else if motion.angle < PI * -0.5 && *target_angle > PI * 0.5 {
            motion.angle += (*target_angle - TAU - motion.angle) * blend;
        } else {
            motion.angle += (*target_angle - motion.angle) * blend;
        }
    }
    motion.angle = wrap_angle(motion.angle);
}
