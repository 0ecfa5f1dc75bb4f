//! Elytra glide state and travel.

use glam::DVec3;

use crate::api::types::PhysicsEvent;
use crate::core::effects::EffectKind;
use crate::core::math::horizontal_length_squared;
use crate::core::trig;
use crate::entity::{MovementInput, Player};
use crate::world::World;

use super::movement::{is_climbing, move_entity};

/// Glide start and stop transitions. Stopping is checked first so a glider
/// that touched down this tick cannot immediately redeploy.
pub fn update_gliding<W: World>(
    world: &W,
    player: &mut Player,
    start_requested: bool,
    events: &mut Vec<PhysicsEvent>,
) {
    if player.gliding
        && (player.on_ground || player.water_height > 0.0 || player.effects.has(EffectKind::Levitation))
    {
        player.gliding = false;
        events.push(PhysicsEvent::GlideStopped);
    }

    if start_requested
        && !player.gliding
        && !player.on_ground
        && !player.abilities.flying
        && player.equipment.elytra
        && player.water_height <= 0.0
        && !player.effects.has(EffectKind::Levitation)
        && !is_climbing(world, player)
    {
        player.gliding = true;
        events.push(PhysicsEvent::GlideStarted);
    }
}

/// Glide aerodynamics.
///
/// The lift factor squares a true `f64` cosine of the pitch; only the dive
/// term goes through the sine table. That mixed precision mirrors the
/// reference exactly.
pub fn travel_gliding<W: World>(
    world: &W,
    player: &mut Player,
    input: &MovementInput,
    gravity: f64,
) {
    let front = trig::view_vector(player.yaw, player.pitch);
    let pitch_rad = player.pitch * trig::DEG_TO_RAD;
    let horizontal_front = (front.x * front.x + front.z * front.z).sqrt();
    let horizontal_speed = horizontal_length_squared(player.velocity).sqrt();
    let front_length = front.length();

    let cos_pitch = (pitch_rad as f64).cos();
    let m = cos_pitch * cos_pitch * (front_length / 0.4).min(1.0);

    player.velocity.y += gravity * (-1.0 + m * 0.75);

    if player.velocity.y < 0.0 && horizontal_front > 0.0 {
        let lift = player.velocity.y * -0.1 * m;
        player.velocity += DVec3::new(
            front.x * lift / horizontal_front,
            lift,
            front.z * lift / horizontal_front,
        );
    }

    if pitch_rad < 0.0 && horizontal_front > 0.0 {
        let dive = horizontal_speed * (-trig::sin(pitch_rad)) as f64 * 0.04;
        player.velocity += DVec3::new(
            -front.x * dive / horizontal_front,
            dive * 3.2,
            -front.z * dive / horizontal_front,
        );
    }

    if horizontal_front > 0.0 {
        player.velocity.x +=
            (front.x / horizontal_front * horizontal_speed - player.velocity.x) * 0.1;
        player.velocity.z +=
            (front.z / horizontal_front * horizontal_speed - player.velocity.z) * 0.1;
    }

    player.velocity *= DVec3::new(0.99f32 as f64, 0.98f32 as f64, 0.99f32 as f64);

    move_entity(world, player, input.sneak, player.velocity);

    if player.velocity.y > -0.5 {
        player.fall_distance = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::GridWorld;

    fn falling_player() -> Player {
        let mut player = Player::new(DVec3::new(0.0, 30.0, 0.0));
        player.on_ground = false;
        player.equipment.elytra = true;
        player
    }

    #[test]
    fn deploy_needs_airborne_and_elytra() {
        let world = GridWorld::new();
        let mut events = Vec::new();

        let mut player = falling_player();
        update_gliding(&world, &mut player, true, &mut events);
        assert!(player.gliding);
        assert_eq!(events, vec![PhysicsEvent::GlideStarted]);

        let mut grounded = falling_player();
        grounded.on_ground = true;
        events.clear();
        update_gliding(&world, &mut grounded, true, &mut events);
        assert!(!grounded.gliding);

        let mut bare = falling_player();
        bare.equipment.elytra = false;
        update_gliding(&world, &mut bare, true, &mut events);
        assert!(!bare.gliding);
    }

    #[test]
    fn water_blocks_deploy_but_lava_does_not() {
        let world = GridWorld::new();
        let mut events = Vec::new();

        let mut wet = falling_player();
        wet.water_height = 0.3;
        update_gliding(&world, &mut wet, true, &mut events);
        assert!(!wet.gliding);

        let mut hot = falling_player();
        hot.lava_height = 0.3;
        update_gliding(&world, &mut hot, true, &mut events);
        assert!(hot.gliding);
    }

    #[test]
    fn levitation_stops_a_glide() {
        let world = GridWorld::new();
        let mut events = Vec::new();
        let mut player = falling_player();
        player.gliding = true;
        player.effects.apply(EffectKind::Levitation, 0, 100);
        update_gliding(&world, &mut player, false, &mut events);
        assert!(!player.gliding);
        assert_eq!(events, vec![PhysicsEvent::GlideStopped]);
    }

    #[test]
    fn landing_stops_without_redeploy_same_tick() {
        let world = GridWorld::new();
        let mut events = Vec::new();
        let mut player = falling_player();
        player.gliding = true;
        player.on_ground = true;
        update_gliding(&world, &mut player, true, &mut events);
        assert!(!player.gliding);
        assert_eq!(events, vec![PhysicsEvent::GlideStopped]);
    }

    #[test]
    fn level_glide_loses_less_height_than_free_fall() {
        let world = GridWorld::new();
        let input = MovementInput::default();

        let mut glider = falling_player();
        glider.gliding = true;
        glider.pitch = 0.0;
        for _ in 0..10 {
            travel_gliding(&world, &mut glider, &input, 0.08);
        }
        // a level glide converts most of the gravity into forward drift
        assert!(glider.velocity.y > -0.5);
        assert!(glider.position.y > 28.0);
    }
}
