//! Powder snow: falling through it and the freeze slowdown.

mod common;

use common::*;
use parity_physics::{BlockState, GridWorld};

#[test]
fn falling_through_powder_snow_slows_the_fall() {
    let mut world = GridWorld::new();
    world.set(block(5, 10, 5), BlockState::powder_snow());
    let mut sim = simulation(world, 5.0, 15.0, 5.0);
    sim.run(&idle(), 20);
    assert_position(&sim, 5.0, 7.0703936080893826, 5.0);
    assert_velocity(&sim, 0.0, -0.6517088341626173, 0.0);
    assert_ground(&sim, false);
}

#[test]
fn freeze_wears_off_after_leaving_the_snow() {
    let mut world = GridWorld::new();
    world.set(block(5, 10, 5), BlockState::powder_snow());
    world.set(block(5, 9, 5), BlockState::stone());
    world.set(block(5, 10, 6), BlockState::powder_snow());
    world.set(block(5, 9, 6), BlockState::stone());
    let mut sim = simulation(world, 5.0, 10.0, 5.0);

    sim.run(&idle(), 5);
    sim.run(&forward(), 5);
    sim.player_mut().ticks_frozen = 90;
    sim.run(&forward(), 5);
    sim.player_mut().ticks_frozen = 0;
    sim.run(&forward(), 5);

    assert_position(&sim, 5.0, 10.0, 6.181250019861122);
    assert_velocity(&sim, 0.0, -0.0784000015258789, 0.0);
    assert_ground(&sim, true);
}
