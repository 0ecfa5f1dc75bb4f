//! The tick: fixed stage ordering over all subsystems.

use crate::api::types::PhysicsEvent;
use crate::core::math::{self, SINK_ACCELERATION};
use crate::entity::{submersion, InputActions, MovementInput, Player};
use crate::world::World;

use super::{elytra, jump, pose, sprint, travel};

/// Impulse scale while sneaking.
const SNEAK_SPEED_FACTOR: f32 = 0.3;

/// Impulse scale while using an item (eating, drawing a bow).
const USING_ITEM_SPEED_FACTOR: f32 = 0.2;

/// Impulse scale applied to all movement input.
const INPUT_SCALE: f32 = 0.98;

/// Advance the player by one tick.
pub fn tick_player<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    actions: &InputActions,
    events: &mut Vec<PhysicsEvent>,
) {
    player.effects.tick();
    if player.hurt_time > 0 {
        player.hurt_time -= 1;
    }

    submersion::update_submersion(world, player);
    if player.lava_height > 0.0 {
        player.fall_distance *= 0.5;
    }

    tick_movement(world, player, input, actions, events);
    pose::update_pose(world, player);
}

fn tick_movement<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    actions: &InputActions,
    events: &mut Vec<PhysicsEvent>,
) {
    sprint::update_swimming(player);
    pose::resolve_sneaking(world, player, input);

    let mut forward = input.forwards();
    let mut sideways = input.sideways();
    if player.sneaking {
        forward *= SNEAK_SPEED_FACTOR;
        sideways *= SNEAK_SPEED_FACTOR;
    }
    if player.using_item {
        forward *= USING_ITEM_SPEED_FACTOR;
        sideways *= USING_ITEM_SPEED_FACTOR;
    }

    sprint::update_sprinting(player, input, forward);
    elytra::update_gliding(world, player, actions.start_gliding, events);

    if player.water_height > 0.0 && input.sneak {
        player.velocity.y -= SINK_ACCELERATION;
    }

    math::flatten_velocity(&mut player.velocity);
    jump::try_jump(player, input, events);

    forward *= INPUT_SCALE;
    sideways *= INPUT_SCALE;
    travel::travel(world, player, input, sideways, forward);

    player.sprint_boost = player.sprinting;
}
