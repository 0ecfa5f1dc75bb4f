//! Water and lava travel.

use glam::DVec3;

use crate::core::effects::EffectKind;
use crate::core::math::SWIM_HEIGHT;
use crate::entity::{MovementInput, Player};
use crate::world::World;

use super::movement::{input_vector, is_climbing, move_entity};
use super::travel::movement_speed;

/// Base horizontal drag in water.
const WATER_FRICTION: f32 = 0.8;

/// Horizontal drag while sprint swimming.
const SPRINT_WATER_FRICTION: f32 = 0.9;

/// Drag with full depth strider, the widened product of 0.6 * 0.91.
const DEPTH_STRIDER_FRICTION: f32 = 0.54600006;

const WATER_ACCELERATION: f32 = 0.02;
const LAVA_ACCELERATION: f32 = 0.02;

/// Vertical sink-rate shaping shared by water and shallow lava.
///
/// A passively sinking entity has its fall speed pinned to a slow constant
/// instead of the raw gravity integral.
pub fn fluid_falling_adjusted(player: &Player, gravity: f64, falling: bool, vertical: f64) -> f64 {
    if player.sprint_boost {
        return vertical;
    }
    if falling
        && (vertical - 0.005).abs() >= 0.003
        && (vertical - gravity / 16.0).abs() < 0.003
    {
        return -0.003;
    }
    vertical - gravity / 16.0
}

pub fn travel_water<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    sideways: f32,
    forward: f32,
    gravity: f64,
    falling: bool,
) {
    let mut friction: f32 = if player.sprinting {
        SPRINT_WATER_FRICTION
    } else {
        WATER_FRICTION
    };
    let mut speed: f32 = WATER_ACCELERATION;

    let mut strider = player.equipment.depth_strider.min(3) as f32;
    if !player.on_ground {
        strider *= 0.5;
    }
    if strider > 0.0 {
        friction += (DEPTH_STRIDER_FRICTION - friction) * strider / 3.0;
        speed += (movement_speed(player) - speed) * strider / 3.0;
    }
    if player.effects.has(EffectKind::DolphinsGrace) {
        friction = 0.96;
    }

    player.velocity += input_vector(sideways, forward, speed, player.yaw);
    let climbing = is_climbing(world, player);
    move_entity(world, player, input.sneak, player.velocity);

    if player.horizontal_collision && climbing {
        player.velocity.y = 0.2;
    }

    player.velocity = DVec3::new(
        player.velocity.x * friction as f64,
        player.velocity.y * 0.8f32 as f64,
        player.velocity.z * friction as f64,
    );
    player.velocity.y = fluid_falling_adjusted(player, gravity, falling, player.velocity.y);
}

pub fn travel_lava<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    sideways: f32,
    forward: f32,
    gravity: f64,
    falling: bool,
) {
    player.velocity += input_vector(sideways, forward, LAVA_ACCELERATION, player.yaw);
    move_entity(world, player, input.sneak, player.velocity);

    if player.lava_height <= SWIM_HEIGHT {
        player.velocity = DVec3::new(
            player.velocity.x * 0.5,
            player.velocity.y * 0.8f32 as f64,
            player.velocity.z * 0.5,
        );
        player.velocity.y =
            fluid_falling_adjusted(player, gravity, falling, player.velocity.y);
    } else {
        player.velocity *= 0.5;
    }

    player.velocity.y -= gravity / 4.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn passive_sink_rate_is_pinned() {
        let player = Player::new(DVec3::ZERO);
        assert_eq!(fluid_falling_adjusted(&player, 0.08, true, 0.0), -0.005);
        // near the slow-falling terminal rate the speed pins to -0.003
        assert_eq!(fluid_falling_adjusted(&player, 0.01, true, -0.002), -0.003);
    }

    #[test]
    fn sprint_swimming_skips_the_adjustment() {
        let mut player = Player::new(DVec3::ZERO);
        player.sprint_boost = true;
        assert_eq!(fluid_falling_adjusted(&player, 0.08, true, -0.2), -0.2);
    }

    #[test]
    fn rising_motion_keeps_the_gravity_term() {
        let player = Player::new(DVec3::ZERO);
        assert_eq!(fluid_falling_adjusted(&player, 0.08, false, 0.1), 0.1 - 0.005);
    }
}
