//! Damage intake and knockback.

use crate::api::types::PhysicsEvent;
use crate::core::trig;
use crate::entity::Player;

const KNOCKBACK_STRENGTH: f64 = 0.4;
const HURT_DURATION: u32 = 10;

/// Apply damage with knockback opposite the facing direction.
///
/// The existing velocity is halved before the push; the vertical component
/// only lifts when standing. The decay back to rest is the regular friction
/// of subsequent ticks, nothing here persists beyond the hurt timer.
pub fn apply_damage(player: &mut Player, amount: f32, events: &mut Vec<PhysicsEvent>) {
    player.health = (player.health - amount).max(0.0);
    player.hurt_time = HURT_DURATION;

    let yaw = player.yaw * trig::DEG_TO_RAD;
    let direction_x = (-trig::sin(yaw)) as f64;
    let direction_z = trig::cos(yaw) as f64;

    player.velocity.x = player.velocity.x / 2.0 - direction_x * KNOCKBACK_STRENGTH;
    if player.on_ground {
        player.velocity.y = (player.velocity.y / 2.0 + KNOCKBACK_STRENGTH).min(KNOCKBACK_STRENGTH);
    }
    player.velocity.z = player.velocity.z / 2.0 - direction_z * KNOCKBACK_STRENGTH;

    events.push(PhysicsEvent::Hurt { amount });
}
