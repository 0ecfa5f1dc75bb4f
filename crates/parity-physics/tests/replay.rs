//! Recording a session and replaying it elsewhere.

mod common;

use common::*;
use parity_physics::{record, replay, BlockState, GridWorld, InputActions, MovementInput, Trace};

fn course() -> GridWorld {
    let mut world = GridWorld::new();
    world.fill(block(-10, 0, -10), block(10, 0, 10), BlockState::stone());
    world.set(block(0, 1, 4), BlockState::slab_bottom());
    world.fill(block(-10, 1, 8), block(10, 2, 8), BlockState::stone());
    world
}

fn held(input: MovementInput, ticks: usize) -> Vec<(MovementInput, InputActions)> {
    vec![(input, InputActions::default()); ticks]
}

#[test]
fn recorded_trace_replays_bit_exact() {
    let mut inputs = held(
        MovementInput {
            forward: true,
            sprint: true,
            ..Default::default()
        },
        20,
    );
    inputs.extend(held(
        MovementInput {
            forward: true,
            jump: true,
            ..Default::default()
        },
        20,
    ));

    let mut source = simulation(course(), 0.5, 1.0, -5.5);
    let trace = record(&mut source, inputs);
    assert_eq!(trace.len(), 40);

    let mut target = simulation(course(), 0.5, 1.0, -5.5);
    assert_eq!(replay(&mut target, &trace), None);
    assert_eq!(target.player().position, source.player().position);
}

#[test]
fn json_round_trip_preserves_every_bit() {
    let mut source = simulation(course(), 0.5, 1.0, -5.5);
    let trace = record(&mut source, held(MovementInput::default(), 10));

    let json = trace.to_json().unwrap();
    let decoded = Trace::from_json(&json).unwrap();
    assert_eq!(decoded, trace);

    let mut target = simulation(course(), 0.5, 1.0, -5.5);
    assert_eq!(replay(&mut target, &decoded), None);
}

#[test]
fn replay_flags_a_changed_world() {
    let mut source = simulation(course(), 0.5, 1.0, -5.5);
    let trace = record(
        &mut source,
        held(
            MovementInput {
                forward: true,
                ..Default::default()
            },
            30,
        ),
    );

    let mut changed = course();
    changed.fill(block(-10, 1, -4), block(10, 3, -4), BlockState::stone());
    let mut target = simulation(changed, 0.5, 1.0, -5.5);
    let divergence = replay(&mut target, &trace).expect("wall must derail the trace");
    assert!(divergence.tick < 30);
}
