//! Shared harness for the parity suites.
//!
//! Expected values are taken from instrumented client sessions and compared
//! bit for bit; a failing assertion here means the pipeline diverged from
//! the reference trajectory, not that a tolerance was missed.

#![allow(dead_code)]

use glam::{DVec3, IVec3};
use parity_physics::{GridWorld, MovementInput, Simulation};

pub fn simulation(world: GridWorld, x: f64, y: f64, z: f64) -> Simulation<GridWorld> {
    Simulation::new(world, DVec3::new(x, y, z))
}

/// Simulation in an empty world, nothing to collide with.
pub fn free_fall(x: f64, y: f64, z: f64) -> Simulation<GridWorld> {
    simulation(GridWorld::new(), x, y, z)
}

pub fn rotate(sim: &mut Simulation<GridWorld>, yaw: f32, pitch: f32) {
    sim.player_mut().yaw = yaw;
    sim.player_mut().pitch = pitch;
}

pub fn idle() -> MovementInput {
    MovementInput::default()
}

pub fn forward() -> MovementInput {
    MovementInput {
        forward: true,
        ..Default::default()
    }
}

pub fn block(x: i32, y: i32, z: i32) -> IVec3 {
    IVec3::new(x, y, z)
}

#[track_caller]
pub fn assert_position(sim: &Simulation<GridWorld>, x: f64, y: f64, z: f64) {
    let position = sim.player().position;
    assert_eq!(
        position,
        DVec3::new(x, y, z),
        "position diverged after {} ticks",
        sim.ticks()
    );
}

#[track_caller]
pub fn assert_velocity(sim: &Simulation<GridWorld>, x: f64, y: f64, z: f64) {
    let velocity = sim.player().velocity;
    assert_eq!(
        velocity,
        DVec3::new(x, y, z),
        "velocity diverged after {} ticks",
        sim.ticks()
    );
}

#[track_caller]
pub fn assert_ground(sim: &Simulation<GridWorld>, on_ground: bool) {
    assert_eq!(sim.player().on_ground, on_ground);
}
