//! Events surfaced to the embedding application.

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick.
///
/// Events are collected per tick and cleared before the next one; they carry
/// no state the simulation itself depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicsEvent {
    /// Jumped off the ground.
    Jumped,
    /// Elytra deployed mid-air.
    GlideStarted,
    /// Glide ended by landing, water or levitation.
    GlideStopped,
    /// Took damage; knockback was applied.
    Hurt { amount: f32 },
}
