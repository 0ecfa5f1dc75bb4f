//! Tick traces: record a simulation run as serializable per-tick snapshots
//! and replay it to verify bit-identical behavior.
//!
//! A trace stores the inputs alongside the resulting state, so a replay can
//! drive a fresh simulation with the recorded inputs and compare every tick
//! against the recorded outcome.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::api::driver::Simulation;
use crate::api::types::PhysicsEvent;
use crate::entity::{InputActions, MovementInput, Pose};
use crate::world::World;

/// One tick of input plus the state it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub input: MovementInput,
    #[serde(default)]
    pub actions: InputActions,
    pub position: DVec3,
    pub velocity: DVec3,
    pub on_ground: bool,
    pub pose: Pose,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<PhysicsEvent>,
}

/// A recorded run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub records: Vec<TickRecord>,
}

impl Trace {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Trace> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run a simulation while recording every tick.
pub fn record<W, I>(simulation: &mut Simulation<W>, inputs: I) -> Trace
where
    W: World,
    I: IntoIterator<Item = (MovementInput, InputActions)>,
{
    let mut trace = Trace::default();
    for (input, actions) in inputs {
        let events = simulation.tick(&input, &actions).to_vec();
        let player = simulation.player();
        trace.records.push(TickRecord {
            tick: simulation.ticks(),
            input,
            actions,
            position: player.position,
            velocity: player.velocity,
            on_ground: player.on_ground,
            pose: player.pose,
            events,
        });
    }
    trace
}

/// A replay divergence: the tick where it happened and both states.
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    pub tick: u64,
    pub expected: DVec3,
    pub actual: DVec3,
}

/// Drive a fresh simulation with the trace's inputs and compare each tick.
///
/// Returns the first divergence, or `None` when the replay matches the
/// recording bit for bit.
pub fn replay<W: World>(simulation: &mut Simulation<W>, trace: &Trace) -> Option<Divergence> {
    for record in &trace.records {
        simulation.tick(&record.input, &record.actions);
        let player = simulation.player();
        if player.position != record.position || player.velocity != record.velocity {
            log::warn!(
                "replay diverged at tick {}: {:?} != {:?}",
                record.tick,
                player.position,
                record.position
            );
            return Some(Divergence {
                tick: record.tick,
                expected: record.position,
                actual: player.position,
            });
        }
    }
    None
}
