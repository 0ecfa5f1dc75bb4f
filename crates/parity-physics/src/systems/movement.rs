//! The entity move pipeline.
//!
//! `move_entity` takes the velocity a travel routine wants to apply and runs
//! it through edge clipping, collision resolution, stepping, the per-axis
//! collision flags and block contact effects. Travel routines call it once
//! per tick; everything it writes back onto the player is part of the next
//! tick's input.

use glam::{DVec3, IVec3};

use crate::collision::{back_off_from_edge, collect_collisions, collide_with_stepping, is_above_ground};
use crate::core::math::{DEFAULT_MARGIN, VELOCITY_EPSILON};
use crate::core::trig;
use crate::entity::submersion;
use crate::entity::Player;
use crate::world::{CollisionKind, ContactEffect, FluidKind, World};

/// Block position below the feet used for slipperiness and speed factor
/// lookups. The offset keeps the lookup on the supporting block when the
/// entity stands exactly on a boundary.
pub fn supporting_block(position: DVec3) -> IVec3 {
    IVec3::new(
        position.x.floor() as i32,
        (position.y - 0.5000001).floor() as i32,
        position.z.floor() as i32,
    )
}

/// Whether the feet are in a climbable block (ladders, vines). Creative
/// flight ignores climbables.
pub fn is_climbing<W: World>(world: &W, player: &Player) -> bool {
    if player.abilities.flying {
        return false;
    }
    world
        .block(player.block_position())
        .is_some_and(|b| b.climbable)
}

/// Rotate raw key impulses into a world-space acceleration.
pub fn input_vector(sideways: f32, forward: f32, speed: f32, yaw: f32) -> DVec3 {
    let mut v = DVec3::new(sideways as f64, 0.0, forward as f64);
    let length_squared = v.length_squared();
    if length_squared < VELOCITY_EPSILON {
        return DVec3::ZERO;
    }
    if length_squared > 1.0 {
        // division, not multiplication by the reciprocal; the low bits of
        // every diagonal trajectory depend on it
        v /= length_squared.sqrt();
    }
    let v = v * speed as f64;
    let sin = trig::sin(yaw * trig::DEG_TO_RAD) as f64;
    let cos = trig::cos(yaw * trig::DEG_TO_RAD) as f64;
    DVec3::new(v.x * cos - v.z * sin, v.y, v.z * cos + v.x * sin)
}

/// Move the entity by `movement`, resolving collisions and updating every
/// collision-derived flag.
pub fn move_entity<W: World>(world: &W, player: &mut Player, sneak_held: bool, movement: DVec3) {
    let mut movement = movement;

    // pending contact slowdown from last tick's cobweb or powder snow
    if player.movement_multiplier.length_squared() > VELOCITY_EPSILON {
        movement *= player.movement_multiplier;
        player.movement_multiplier = DVec3::ZERO;
        player.velocity = DVec3::ZERO;
    }

    let context = player.shape_context();
    let aabb = player.aabb();

    if sneak_held
        && movement.y <= 0.0
        && !player.abilities.flying
        && is_above_ground(world, &context, &aabb, player.on_ground, player.fall_distance)
    {
        movement = back_off_from_edge(world, &context, &aabb, movement);
    }

    let field = collect_collisions(world, &context, movement, &aabb);
    let collision = collide_with_stepping(player.on_ground, movement, &aabb, &field);

    player.position += collision;

    let collided_x = (movement.x - collision.x).abs() > DEFAULT_MARGIN;
    let collided_y = (movement.y - collision.y).abs() > DEFAULT_MARGIN;
    let collided_z = (movement.z - collision.z).abs() > DEFAULT_MARGIN;
    player.horizontal_collision = collided_x || collided_z;
    player.on_ground = collided_y && movement.y < 0.0;

    if collided_x {
        player.velocity.x = 0.0;
    }
    if collided_z {
        player.velocity.z = 0.0;
    }

    if player.on_ground {
        player.fall_distance = 0.0;
    } else {
        player.fall_distance = (player.fall_distance as f64 - collision.y) as f32;
    }
    submersion::refresh_water_state(world, player);

    if collided_y {
        player.velocity.y = 0.0;
    }

    check_block_collisions(world, player);

    let factor = block_speed_factor(world, player) as f64;
    player.velocity.x *= factor;
    player.velocity.z *= factor;
}

/// Apply contact effects of every block the hitbox overlaps.
///
/// Powder snow only sticks to living entities whose feet block is the snow
/// itself, so a fall through a lone block speeds back up as soon as the feet
/// pass its underside, while the hitbox still overlaps it.
fn check_block_collisions<W: World>(world: &W, player: &mut Player) {
    player.in_powder_snow = false;
    let feet_in_snow = world
        .block(player.block_position())
        .is_some_and(|b| b.collision == CollisionKind::PowderSnow);
    for position in player.aabb().shrink(1.0e-7).blocks() {
        let Some(state) = world.block(position) else {
            continue;
        };
        let snow = state.collision == CollisionKind::PowderSnow;
        if snow {
            player.in_powder_snow = true;
        }
        if let Some(ContactEffect::SlowMovement { multiplier }) = state.contact_effect {
            if !player.abilities.flying && (!snow || feet_in_snow) {
                player.movement_multiplier = multiplier;
                player.fall_distance = 0.0;
            }
        }
    }
}

/// Horizontal velocity multiplier of the block being stood in or on.
fn block_speed_factor<W: World>(world: &W, player: &Player) -> f32 {
    if player.abilities.flying || player.gliding {
        return 1.0;
    }
    if let Some(state) = world.block(player.block_position()) {
        if state.fluid.is_some_and(|f| f.kind == FluidKind::Water) {
            return state.velocity_multiplier;
        }
        if state.velocity_multiplier != 1.0 {
            return state.velocity_multiplier;
        }
    }
    world
        .block(supporting_block(player.position))
        .map(|b| b.velocity_multiplier)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockState, GridWorld};

    fn flat_world() -> GridWorld {
        let mut world = GridWorld::new();
        world.fill(IVec3::new(-4, 0, -4), IVec3::new(4, 0, 4), BlockState::stone());
        world
    }

    fn grounded_player(world: &GridWorld) -> Player {
        let mut player = Player::new(DVec3::new(0.5, 1.0, 0.5));
        move_entity(world, &mut player, false, DVec3::new(0.0, -0.1, 0.0));
        assert!(player.on_ground);
        player
    }

    #[test]
    fn landing_sets_ground_and_clears_fall() {
        let world = flat_world();
        let mut player = Player::new(DVec3::new(0.5, 1.05, 0.5));
        player.fall_distance = 3.0;
        move_entity(&world, &mut player, false, DVec3::new(0.0, -0.2, 0.0));
        assert!(player.on_ground);
        assert_eq!(player.position.y, 1.0);
        assert_eq!(player.fall_distance, 0.0);
    }

    #[test]
    fn falling_accumulates_fall_distance() {
        let world = GridWorld::new();
        let mut player = Player::new(DVec3::new(0.5, 10.0, 0.5));
        move_entity(&world, &mut player, false, DVec3::new(0.0, -0.5, 0.0));
        assert!(!player.on_ground);
        assert_eq!(player.fall_distance, 0.5);
        move_entity(&world, &mut player, false, DVec3::new(0.0, -0.25, 0.0));
        assert_eq!(player.fall_distance, 0.75);
    }

    #[test]
    fn wall_contact_zeroes_velocity_on_that_axis() {
        let mut world = flat_world();
        world.set(IVec3::new(0, 1, 1), BlockState::stone());
        world.set(IVec3::new(0, 2, 1), BlockState::stone());
        let mut player = grounded_player(&world);
        player.velocity = DVec3::new(0.0, -0.08, 0.5);
        let velocity = player.velocity;
        move_entity(&world, &mut player, false, velocity);
        assert!(player.horizontal_collision);
        assert_eq!(player.velocity.z, 0.0);
    }

    #[test]
    fn input_vector_respects_yaw() {
        let forward = input_vector(0.0, 1.0, 0.1, 0.0);
        assert!(forward.z > 0.099 && forward.x.abs() < 1.0e-6);

        let turned = input_vector(0.0, 1.0, 0.1, 90.0);
        // yaw 90 looks toward -x
        assert!(turned.x < -0.099 && turned.z.abs() < 1.0e-3);
    }

    #[test]
    fn input_vector_normalizes_diagonals() {
        let diagonal = input_vector(1.0, 1.0, 0.1, 0.0);
        let length = (diagonal.x * diagonal.x + diagonal.z * diagonal.z).sqrt();
        assert!((length - 0.1).abs() < 1.0e-6);

        // drag-scaled diagonal input, low bits pinned by the division form
        let scaled = input_vector(0.98, 0.98, 0.1, 0.0);
        assert_eq!(scaled.z, 0.07071067917232597);
        assert_eq!(scaled.x, 0.07071067917232597);
    }

    #[test]
    fn cobweb_multiplier_consumes_velocity() {
        let mut world = flat_world();
        let mut web = BlockState::stone();
        web.collision = CollisionKind::None;
        web.contact_effect = Some(ContactEffect::SlowMovement {
            multiplier: DVec3::new(0.25, 0.05, 0.25),
        });
        world.set(IVec3::new(0, 1, 0), web);

        let mut player = grounded_player(&world);
        player.velocity = DVec3::new(0.0, 0.0, 0.3);
        let velocity = player.velocity;
        move_entity(&world, &mut player, false, velocity);
        assert_eq!(player.movement_multiplier, DVec3::new(0.25, 0.05, 0.25));

        // next move is scaled and the stored velocity is discarded
        let before = player.position;
        move_entity(&world, &mut player, false, DVec3::new(0.0, 0.0, 0.4));
        assert!((player.position.z - before.z - 0.1).abs() < 1.0e-9);
        assert_eq!(player.velocity, DVec3::ZERO);
        assert_eq!(player.movement_multiplier, DVec3::new(0.25, 0.05, 0.25));
    }

    #[test]
    fn powder_snow_releases_once_the_feet_are_below_it() {
        let mut world = GridWorld::new();
        world.set(IVec3::new(0, 10, 0), BlockState::powder_snow());

        // feet inside the block: slowdown latches
        let mut player = Player::new(DVec3::new(0.5, 10.5, 0.5));
        move_entity(&world, &mut player, false, DVec3::ZERO);
        assert!(player.in_powder_snow);
        assert_ne!(player.movement_multiplier, DVec3::ZERO);

        // feet below the block, hitbox still overlapping: no slowdown
        let mut player = Player::new(DVec3::new(0.5, 9.5, 0.5));
        move_entity(&world, &mut player, false, DVec3::ZERO);
        assert!(player.in_powder_snow);
        assert_eq!(player.movement_multiplier, DVec3::ZERO);
    }

    #[test]
    fn honey_like_block_scales_horizontal_velocity() {
        let mut world = flat_world();
        let mut sticky = BlockState::stone();
        sticky.velocity_multiplier = 0.4;
        world.set(IVec3::new(0, 0, 0), sticky);

        let mut player = grounded_player(&world);
        player.velocity = DVec3::new(0.0, -0.08, 0.2);
        let velocity = player.velocity;
        move_entity(&world, &mut player, false, velocity);
        assert_eq!(player.velocity.z, 0.2 * 0.4f32 as f64);
    }
}
