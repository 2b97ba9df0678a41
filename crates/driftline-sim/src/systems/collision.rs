//! Collision detection — coarse radial filter plus oriented-box
//! separating-axis test over every motion pair.
//!
//! Pure function over the current motion snapshot: no state survives between
//! frames. Every overlapping pair records two duplicate-allowed collision
//! events, one per direction, so the resolver can process the pair from
//! either entity's perspective.
//!
//! The pair scan is O(n²); fine at arcade entity counts (a dozen or two),
//! with the radial filter rejecting nearly every pair before the corner math.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use driftline_core::components::{Collision, Motion};
use driftline_core::math::heading_vector;
use driftline_core::registry::Registry;

/// The four corners of the motion's oriented bounding box, rotated about the
/// origin. Callers translate to world space.
fn bounding_points(motion: &Motion) -> [Vec2; 4] {
    let half = Vec2::new(motion.scale.x.abs() / 2.0, motion.scale.y.abs() / 2.0);
    let (sin, cos) = motion.angle.sin_cos();
    let rotate = |p: Vec2| Vec2::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y);
    [
        rotate(half),
        rotate(Vec2::new(half.x, -half.y)),
        rotate(-half),
        rotate(Vec2::new(-half.x, half.y)),
    ]
}

/// Minimum and maximum of the corners projected onto a unit axis.
fn projected_interval(points: &[Vec2; 4], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for point in points {
        let projected = point.dot(axis);
        min = min.min(projected);
        max = max.max(projected);
    }
    (min, max)
}

/// Whether the two corner sets are disjoint when projected onto the axis at
/// `angle`. Strict comparisons: exactly-touching intervals do not separate,
/// so a shared edge counts as a collision.
fn separated_on_axis(points1: &[Vec2; 4], points2: &[Vec2; 4], angle: f32) -> bool {
    let axis = heading_vector(angle);
    let (min1, max1) = projected_interval(points1, axis);
    let (min2, max2) = projected_interval(points2, axis);
    min1 > max2 || max1 < min2
}

/// Whether two motions overlap: a radial-bound estimate first, then the
/// separating-axis theorem over both boxes' heading and perpendicular axes.
pub fn collides(motion1: &Motion, motion2: &Motion) -> bool {
    let dp = motion1.position - motion2.position;
    let dist_squared = dp.dot(dp);
    let max_collision_distance =
        (motion1.scale.dot(motion1.scale) + motion2.scale.dot(motion2.scale)) / 2.0;
    if dist_squared >= max_collision_distance {
        return false;
    }

    let mut points1 = bounding_points(motion1);
    for point in &mut points1 {
        *point += motion1.position;
    }
    let mut points2 = bounding_points(motion2);
    for point in &mut points2 {
        *point += motion2.position;
    }

    let axis_angles = [
        motion1.angle,
        FRAC_PI_2 + motion1.angle,
        motion2.angle,
        FRAC_PI_2 + motion2.angle,
    ];
    !axis_angles
        .iter()
        .any(|&angle| separated_on_axis(&points1, &points2, angle))
}

/// Scan all unordered motion pairs, recording paired collision events for
/// every overlap.
pub fn run(registry: &mut Registry) {
    let count = registry.motions.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let motion_i = &registry.motions.components()[i];
            let motion_j = &registry.motions.components()[j];
            if collides(motion_i, motion_j) {
                let entity_i = registry.motions.entities()[i];
                let entity_j = registry.motions.entities()[j];
                registry.collisions.push(entity_i, Collision { other: entity_j });
                registry.collisions.push(entity_j, Collision { other: entity_i });
            }
        }
    }
}
