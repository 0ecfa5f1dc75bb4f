//! Sprint and swim state transitions.

use crate::entity::{MovementInput, Player};

/// Minimum food level that still allows sprinting.
const SPRINT_HUNGER_THRESHOLD: u32 = 6;

/// Forward impulse above which movement counts as "moving forward".
const FORWARD_EPSILON: f32 = 0.0005;

/// Forward impulse needed to start a sprint on land.
const SPRINT_START_THRESHOLD: f32 = 0.8;

/// Whether sprint should be active this tick.
///
/// The rules distinguish keeping a sprint (any forward movement) from
/// starting one (nearly full forward input, unless already swimming where
/// any forward motion is enough).
pub fn should_sprint(player: &Player, input: &MovementInput, forward: f32) -> bool {
    if player.hunger <= SPRINT_HUNGER_THRESHOLD {
        return false;
    }
    if !(forward > FORWARD_EPSILON) {
        return false;
    }
    if player.water_height > 0.0 && !player.eye_in_water {
        return false;
    }
    if player.horizontal_collision {
        return false;
    }
    if player.sprinting {
        return true;
    }
    if !input.sprint {
        return false;
    }
    if player.using_item {
        return false;
    }
    if player.eye_in_water {
        forward > FORWARD_EPSILON
    } else {
        forward > SPRINT_START_THRESHOLD
    }
}

pub fn update_sprinting(player: &mut Player, input: &MovementInput, forward: f32) {
    player.sprinting = should_sprint(player, input, forward);
}

/// Swimming is sprinting while submerged to eye level.
pub fn update_swimming(player: &mut Player) {
    player.swimming = player.sprinting
        && player.water_height > 0.0
        && player.eye_in_water
        && !player.abilities.flying;
}
