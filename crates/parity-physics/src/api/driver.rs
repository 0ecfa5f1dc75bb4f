//! The simulation driver: owns a world and a player and advances them tick
//! by tick, collecting events for the embedder.

use glam::DVec3;

use crate::api::types::PhysicsEvent;
use crate::entity::{InputActions, MovementInput, Player};
use crate::systems;
use crate::world::World;

/// A running simulation of one player in one world.
pub struct Simulation<W> {
    world: W,
    player: Player,
    ticks: u64,
    events: Vec<PhysicsEvent>,
}

impl<W: World> Simulation<W> {
    /// Spawn a fresh player at a position.
    pub fn new(world: W, spawn: DVec3) -> Simulation<W> {
        Simulation::with_player(world, Player::new(spawn))
    }

    /// Start from a fully prepared player state.
    pub fn with_player(world: W, player: Player) -> Simulation<W> {
        log::debug!("simulation start at {:?}", player.position);
        Simulation {
            world,
            player,
            ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Ticks advanced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Events emitted by the most recent tick.
    pub fn events(&self) -> &[PhysicsEvent] {
        &self.events
    }

    /// Advance one tick with held keys and one-shot actions.
    pub fn tick(&mut self, input: &MovementInput, actions: &InputActions) -> &[PhysicsEvent] {
        self.events.clear();
        systems::tick_player(&self.world, &mut self.player, input, actions, &mut self.events);
        self.ticks += 1;
        log::trace!(
            "tick {}: pos {:?} vel {:?} ground {}",
            self.ticks,
            self.player.position,
            self.player.velocity,
            self.player.on_ground
        );
        &self.events
    }

    /// Advance one tick with held keys only.
    pub fn tick_held(&mut self, input: &MovementInput) -> &[PhysicsEvent] {
        self.tick(input, &InputActions::default())
    }

    /// Run several identical ticks.
    pub fn run(&mut self, input: &MovementInput, ticks: u32) {
        for _ in 0..ticks {
            self.tick_held(input);
        }
    }

    /// Damage the player, applying knockback immediately.
    pub fn damage(&mut self, amount: f32) -> &[PhysicsEvent] {
        systems::apply_damage(&mut self.player, amount, &mut self.events);
        &self.events
    }
}
