//! Per-tick control input.

use serde::{Deserialize, Serialize};

/// Held movement keys for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sneak: bool,
    pub sprint: bool,
}

impl MovementInput {
    /// Signed forward impulse, opposing keys cancel.
    pub fn forwards(&self) -> f32 {
        (self.forward as i32 - self.backward as i32) as f32
    }

    /// Signed sideways impulse, positive is to the left.
    pub fn sideways(&self) -> f32 {
        (self.left as i32 - self.right as i32) as f32
    }
}

/// One-shot actions triggered this tick, separate from held keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputActions {
    /// Attempt to deploy the elytra mid-air.
    pub start_gliding: bool,
}
