//! Axis-ordered movement resolution and step-up handling.
//!
//! The sweep resolves Y first, then the horizontal axes. The horizontal
//! order is decided by a raw (not absolute) comparison of the adjusted
//! components; that quirk is part of the reference behavior and changing it
//! shifts trajectories that graze corners.

use glam::DVec3;

use crate::core::aabb::{Aabb, Axis};
use crate::core::math::{horizontal_length_squared, STEP_HEIGHT, VELOCITY_EPSILON};

use super::field::CollisionField;

fn check_movement(
    axis: Axis,
    value: f64,
    offset_box: bool,
    aabb: &mut Aabb,
    field: &CollisionField,
) -> f64 {
    if value == 0.0 || value.abs() < VELOCITY_EPSILON {
        return 0.0;
    }
    let value = field.max_distance(aabb, value, axis);
    if offset_box && value != 0.0 {
        aabb.translate_axis(axis, value);
    }
    value
}

/// Resolve a movement vector against a collision field.
pub fn collide(movement: DVec3, aabb: &Aabb, field: &CollisionField) -> DVec3 {
    if movement.length_squared() < VELOCITY_EPSILON {
        return movement;
    }

    let mut moved = *aabb;
    let mut adjusted = movement;

    adjusted.y = check_movement(Axis::Y, adjusted.y, true, &mut moved, field);

    let z_priority = adjusted.z > adjusted.x;
    if z_priority {
        adjusted.z = check_movement(Axis::Z, adjusted.z, true, &mut moved, field);
    }
    adjusted.x = check_movement(Axis::X, adjusted.x, true, &mut moved, field);
    if !z_priority {
        adjusted.z = check_movement(Axis::Z, adjusted.z, false, &mut moved, field);
    }

    if adjusted.length_squared() > movement.length_squared() {
        // a clamp produced a larger vector than requested; treat as stuck
        log::trace!("collision overshoot, movement dropped: {movement:?} -> {adjusted:?}");
        return DVec3::ZERO;
    }

    adjusted
}

/// Resolve a movement vector, then try to walk up obstructing ledges.
///
/// An entity on the ground whose horizontal movement got clipped retries the
/// sweep lifted by up to the step height and keeps the better outcome.
pub fn collide_with_stepping(
    on_ground: bool,
    movement: DVec3,
    aabb: &Aabb,
    field: &CollisionField,
) -> DVec3 {
    let collision = collide(movement, aabb, field);

    let collided_x = movement.x != collision.x;
    let collided_y = movement.y != collision.y;
    let collided_z = movement.z != collision.z;

    let grounded = on_ground || collided_y && movement.y < 0.0;
    if !grounded || !(collided_x || collided_z) {
        return collision;
    }

    let step = STEP_HEIGHT as f64;
    let horizontal = DVec3::new(movement.x, 0.0, movement.z);

    let mut total = collide(DVec3::new(movement.x, step, movement.z), aabb, field);
    let vertical = collide(DVec3::new(0.0, step, 0.0), &aabb.extend(horizontal), field);

    if vertical.y < step {
        let stepped = collide(horizontal, &aabb.offset(vertical), field) + vertical;
        if horizontal_length_squared(stepped) > total.length_squared() {
            total = stepped;
        }
    }

    if horizontal_length_squared(total) > collision.length_squared() {
        let settle = collide(
            DVec3::new(0.0, -total.y + movement.y, 0.0),
            &aabb.offset(total),
            field,
        );
        return total + settle;
    }

    collision
}
