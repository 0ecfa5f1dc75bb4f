//! Slow falling: reduced gravity while descending.

mod common;

use common::*;
use parity_physics::{BlockState, EffectKind, GridWorld, MovementInput, Simulation};

fn slow_falling(x: f64, y: f64, z: f64) -> Simulation<GridWorld> {
    let mut sim = free_fall(x, y, z);
    sim.player_mut()
        .effects
        .apply(EffectKind::SlowFalling, 1, 1000000);
    sim
}

#[test]
fn falling_10_ticks() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    sim.run(&idle(), 10);
    assert_position(&sim, 12.0, 8.581716202198574, 4.0);
    assert_velocity(&sim, 0.0, -0.08963433392945042, 0.0);
}

#[test]
fn falling_20_ticks() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    sim.run(&idle(), 20);
    assert_position(&sim, 12.0, 7.34360447964139, 4.0);
    assert_velocity(&sim, 0.0, -0.16287212500076237, 0.0);
}

#[test]
fn falling_30_ticks() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    sim.run(&idle(), 30);
    assert_position(&sim, 12.0, 5.435633523066263, 4.0);
    assert_velocity(&sim, 0.0, -0.2227127441682665, 0.0);
}

#[test]
fn falling_819_ticks() {
    let mut sim = slow_falling(12.0, 1731.0, 4.0);
    sim.run(&idle(), 819);
    assert_position(&sim, 12.0, 1354.1896550798454, 4.0);
    assert_velocity(&sim, 0.0, -0.49000044489580974, 0.0);
}

#[test]
fn falling_while_steering_forward() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    sim.run(&forward(), 22);
    assert_position(&sim, 12.0, 7.011317668842605, 6.865653977122466);
    assert_velocity(&sim, 0.0, -0.17582639550412438, 0.17329121596800717);
}

#[test]
fn falling_while_steering_diagonally() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    let input = MovementInput {
        forward: true,
        left: true,
        ..Default::default()
    };
    sim.run(&input, 22);
    assert_position(&sim, 14.067676857469072, 7.011317668842605, 6.067676857469071);
    assert_velocity(&sim, 0.12503611382261814, -0.17582639550412438, 0.12503611382261814);
}

#[test]
fn falling_rotated_112() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    rotate(&mut sim, 112.0, 2.0);
    let input = MovementInput {
        forward: true,
        left: true,
        ..Default::default()
    };
    sim.run(&input, 21);
    assert_position(&sim, 9.487287028821642, 7.180732354640627, 5.066861381758541);
    assert_velocity(&sim, -0.16045254496855785, -0.16941468579802124, 0.06812581691396043);
}

#[test]
fn falling_rotated_87_backwards() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    rotate(&mut sim, 87.0, 29.0);
    let input = MovementInput {
        backward: true,
        left: true,
        ..Default::default()
    };
    sim.run(&input, 21);
    assert_position(&sim, 14.028803648871559, 7.180732354640627, 5.826437788086396);
    assert_velocity(&sim, 0.12955188771532442, -0.16941468579802124, 0.11662955327037396);
}

#[test]
fn falling_rotated_1_back_right() {
    let mut sim = slow_falling(7.0, 9.0, 4.0);
    rotate(&mut sim, 1.0, 1.0);
    let input = MovementInput {
        backward: true,
        right: true,
        ..Default::default()
    };
    sim.run(&input, 19);
    assert_position(&sim, 5.367725707227726, 7.499800522325905, 2.3097449032621284);
    assert_velocity(&sim, -0.11706669618255752, -0.1561960426845147, -0.12122507887124932);
}

#[test]
fn glancing_off_a_slab() {
    let mut sim = slow_falling(12.0, 9.0, 4.0);
    sim.world_mut().set(block(12, 7, 4), BlockState::slab_top());
    sim.run(&forward(), 67);
    assert_position(&sim, 12.0, -5.658685464394173, 16.39310681036411);
    assert_velocity(&sim, 0.0, -0.36342658308358955, 0.19782070829555476);
}
