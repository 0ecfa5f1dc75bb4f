//! Edge clipping while sneaking.
//!
//! A sneaking entity near a ledge has its horizontal movement shortened in
//! 0.05 increments until the destination still has ground underneath it
//! within the step height. The adjustment happens before collision
//! resolution, so the shortened vector is what the sweep sees.

use glam::DVec3;

use crate::core::aabb::Aabb;
use crate::core::math::STEP_HEIGHT;
use crate::world::World;

use super::field::{is_space_empty, ShapeContext};

const CLIP_INCREMENT: f64 = 0.05;

fn shrink_toward_zero(value: f64) -> f64 {
    if value < CLIP_INCREMENT && value >= -CLIP_INCREMENT {
        0.0
    } else if value > 0.0 {
        value - CLIP_INCREMENT
    } else {
        value + CLIP_INCREMENT
    }
}

/// Whether the entity counts as standing for edge-clip purposes.
///
/// Being airborne just below the step height still counts, as long as there
/// is ground within that distance below the feet.
pub fn is_above_ground<W: World>(
    world: &W,
    context: &ShapeContext,
    aabb: &Aabb,
    on_ground: bool,
    fall_distance: f32,
) -> bool {
    on_ground
        || fall_distance < STEP_HEIGHT && {
            let probe = aabb.offset(DVec3::new(0.0, (fall_distance - STEP_HEIGHT) as f64, 0.0));
            !is_space_empty(world, context, &probe)
        }
}

/// Shorten a horizontal movement so a sneaking entity cannot walk off an
/// edge. Returns the movement unchanged when no clipping is needed.
pub fn back_off_from_edge<W: World>(
    world: &W,
    context: &ShapeContext,
    aabb: &Aabb,
    movement: DVec3,
) -> DVec3 {
    let step = STEP_HEIGHT as f64;
    let mut d = movement.x;
    let mut e = movement.z;

    while d != 0.0 && is_space_empty(world, context, &aabb.offset(DVec3::new(d, -step, 0.0))) {
        d = shrink_toward_zero(d);
    }
    while e != 0.0 && is_space_empty(world, context, &aabb.offset(DVec3::new(0.0, -step, e))) {
        e = shrink_toward_zero(e);
    }
    while d != 0.0
        && e != 0.0
        && is_space_empty(world, context, &aabb.offset(DVec3::new(d, -step, e)))
    {
        d = shrink_toward_zero(d);
        e = shrink_toward_zero(e);
    }

    DVec3::new(d, movement.y, e)
}
