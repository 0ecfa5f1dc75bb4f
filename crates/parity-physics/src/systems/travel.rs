//! Travel dispatch: one entry point that picks the environment-specific
//! movement routine and applies the shared gravity handling around it.

use glam::{DVec3, IVec3};

use crate::core::attributes::{resolve_movement_speed, Modifier};
use crate::core::effects::EffectKind;
use crate::core::math::{
    AIR_ACCELERATION, AIR_FRICTION, DEFAULT_SLIPPERINESS, GRAVITY, GROUND_SPEED_FACTOR,
    SLOW_FALLING_GRAVITY, SPRINT_AIR_ACCELERATION, SPRINT_MODIFIER, VERTICAL_DRAG,
};
use crate::core::trig;
use crate::entity::{MovementInput, Player};
use crate::world::{FluidKind, World};

use super::elytra::travel_gliding;
use super::fluid::{travel_lava, travel_water};
use super::movement::{input_vector, is_climbing, move_entity, supporting_block};
use super::snow;

/// Creative flight base speed, doubled while sprinting.
const FLYING_SPEED: f32 = 0.05;

/// Ladder climb speed cap, widened from the client's `f32` clamp.
const CLIMB_CLAMP: f64 = 0.15f32 as f64;

/// Effective movement speed from the attribute pipeline: status effects in
/// application order, then the sprint bonus, plus the freeze penalty.
pub fn movement_speed(player: &Player) -> f32 {
    let mut modifiers = Vec::new();
    player.effects.speed_modifiers(&mut modifiers);
    if player.sprinting {
        modifiers.push(Modifier::multiply_total(SPRINT_MODIFIER));
    }
    if player.ticks_frozen > 0 {
        modifiers.push(snow::frozen_speed_modifier(player.ticks_frozen));
    }
    resolve_movement_speed(&modifiers)
}

fn air_speed(player: &Player) -> f32 {
    if player.abilities.flying {
        return FLYING_SPEED * if player.sprinting { 2.0 } else { 1.0 };
    }
    if player.sprint_boost {
        SPRINT_AIR_ACCELERATION
    } else {
        AIR_ACCELERATION
    }
}

/// Top-level travel entry, called once per tick with the scaled impulses.
pub fn travel<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    sideways: f32,
    forward: f32,
) {
    if player.abilities.flying {
        let initial_vertical = player.velocity.y;
        travel_living(world, player, input, sideways, forward);
        player.velocity.y = initial_vertical * 0.6;
        player.fall_distance = 0.0;
        player.gliding = false;
        return;
    }
    if player.swimming {
        swim_pitch_adjust(world, player, input);
    }
    travel_living(world, player, input, sideways, forward);
}

/// Steer the vertical swim speed toward the view pitch before the regular
/// water travel runs.
fn swim_pitch_adjust<W: World>(world: &W, player: &mut Player, input: &MovementInput) {
    let front_y = trig::view_vector(player.yaw, player.pitch).y;
    let above = IVec3::new(
        player.position.x.floor() as i32,
        (player.position.y + 0.9).floor() as i32,
        player.position.z.floor() as i32,
    );
    let fluid_above = world.block(above).is_some_and(|b| b.fluid.is_some());

    if front_y <= 0.0 || input.jump || fluid_above {
        let rate = if front_y < -0.2 { 0.085 } else { 0.06 };
        player.velocity.y += (front_y - player.velocity.y) * rate;
    }
}

fn travel_living<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    sideways: f32,
    forward: f32,
) {
    let mut gravity = GRAVITY;
    let falling = player.velocity.y <= 0.0;
    if falling && player.effects.has(EffectKind::SlowFalling) {
        gravity = SLOW_FALLING_GRAVITY;
        player.fall_distance = 0.0;
    }

    let in_fluid = !player.abilities.flying;
    if in_fluid && player.primary_fluid == Some(FluidKind::Water) {
        travel_water(world, player, input, sideways, forward, gravity, falling);
    } else if in_fluid && player.primary_fluid == Some(FluidKind::Lava) {
        travel_lava(world, player, input, sideways, forward, gravity, falling);
    } else if player.gliding {
        travel_gliding(world, player, input, gravity);
    } else {
        travel_normal(world, player, input, sideways, forward, gravity);
    }
}

fn travel_normal<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    sideways: f32,
    forward: f32,
    gravity: f64,
) {
    let slipperiness = world
        .block(supporting_block(player.position))
        .map(|b| b.slipperiness)
        .unwrap_or(DEFAULT_SLIPPERINESS);

    let friction: f32 = if player.on_ground {
        slipperiness * AIR_FRICTION
    } else {
        AIR_FRICTION
    };
    let speed: f32 = if player.on_ground {
        movement_speed(player) * (GROUND_SPEED_FACTOR / (slipperiness * slipperiness * slipperiness))
    } else {
        air_speed(player)
    };

    player.velocity += input_vector(sideways, forward, speed, player.yaw);

    let climbing = is_climbing(world, player);
    if climbing {
        player.fall_distance = 0.0;
        player.velocity.x = player.velocity.x.clamp(-CLIMB_CLAMP, CLIMB_CLAMP);
        player.velocity.z = player.velocity.z.clamp(-CLIMB_CLAMP, CLIMB_CLAMP);
        player.velocity.y = player.velocity.y.max(-CLIMB_CLAMP);
        if player.velocity.y < 0.0 && input.sneak {
            player.velocity.y = 0.0;
        }
    }

    move_entity(world, player, input.sneak, player.velocity);

    if (player.horizontal_collision || input.jump) && climbing {
        player.velocity.y = 0.2;
    }

    if let Some(levitation) = player.effects.get(EffectKind::Levitation) {
        player.velocity.y +=
            (0.05 * (levitation.amplifier as f64 + 1.0) - player.velocity.y) * 0.2;
        player.fall_distance = 0.0;
    } else {
        player.velocity.y -= gravity;
    }

    player.velocity = DVec3::new(
        player.velocity.x * friction as f64,
        player.velocity.y * VERTICAL_DRAG,
        player.velocity.z * friction as f64,
    );
}
