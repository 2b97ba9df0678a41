//! Small geometry helpers shared by the physics and resolution systems.

use glam::Vec2;

/// Unit vector along a heading angle.
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Clockwise perpendicular of a vector.
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Reflect a velocity about a unit normal: `-v + 2·dot(v, n)·n`.
///
/// The component along `n` is inverted, the tangential component keeps its
/// magnitude.
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    -v + 2.0 * v.dot(normal) * normal
}

/// Wrap an angle into `[-PI, PI]`.
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}
