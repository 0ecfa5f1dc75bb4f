//! Jumping and fluid swim strokes.

use crate::api::types::PhysicsEvent;
use crate::core::effects::EffectKind;
use crate::core::math::{JUMP_BOOST_STEP, JUMP_POWER, SWIM_HEIGHT, SWIM_UPWARDS_ACCELERATION};
use crate::core::trig;
use crate::entity::{MovementInput, Player};
use crate::world::FluidKind;

const JUMP_DELAY_TICKS: u32 = 10;

/// Handle the held jump key: swim strokes in deep fluid, a ground jump
/// otherwise, rate limited by the jump cooldown.
pub fn try_jump(player: &mut Player, input: &MovementInput, events: &mut Vec<PhysicsEvent>) {
    if player.jump_cooldown > 0 {
        player.jump_cooldown -= 1;
    }
    if !input.jump {
        player.jump_cooldown = 0;
        return;
    }

    let height = if player.lava_height > 0.0 {
        player.lava_height
    } else if player.primary_fluid == Some(FluidKind::Water) {
        player.water_height
    } else {
        player.lava_height
    };
    let deep_enough_to_swim = height > SWIM_HEIGHT;

    if player.primary_fluid.is_some() && (deep_enough_to_swim || !player.on_ground) {
        player.velocity.y += SWIM_UPWARDS_ACCELERATION;
    } else if (player.on_ground || player.water_height > 0.0 && height > 0.0)
        && player.jump_cooldown == 0
    {
        jump_from_ground(player, events);
        player.jump_cooldown = JUMP_DELAY_TICKS;
    }
}

fn jump_power(player: &Player) -> f64 {
    let boost = player
        .effects
        .get(EffectKind::JumpBoost)
        .map(|e| JUMP_BOOST_STEP * (e.amplifier + 1) as f64)
        .unwrap_or(0.0);
    JUMP_POWER + boost
}

fn jump_from_ground(player: &mut Player, events: &mut Vec<PhysicsEvent>) {
    player.velocity.y = jump_power(player);
    if player.sprint_boost {
        let yaw = player.yaw * trig::DEG_TO_RAD;
        player.velocity.x += (-trig::sin(yaw) * 0.2f32) as f64;
        player.velocity.z += (trig::cos(yaw) * 0.2f32) as f64;
    }
    events.push(PhysicsEvent::Jumped);
}
