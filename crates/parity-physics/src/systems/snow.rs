//! Freezing in powder snow.
//!
//! The freeze counter itself is server data; the simulation only consumes it.
//! Only the resulting movement slowdown is computed here.

use crate::core::attributes::Modifier;

/// Freeze counter value at which the slowdown saturates.
pub const FULL_FREEZE_TICKS: u32 = 140;

/// Movement speed penalty at full freeze.
const FROZEN_SPEED_PENALTY: f64 = -0.05;

/// Additive speed modifier for the current freeze progress.
///
/// The progress fraction is computed in `f32` and widened, like the
/// client's `getPercentFrozen`.
pub fn frozen_speed_modifier(ticks_frozen: u32) -> Modifier {
    let percent = (ticks_frozen.min(FULL_FREEZE_TICKS) as f32 / FULL_FREEZE_TICKS as f32) as f64;
    Modifier::add(FROZEN_SPEED_PENALTY * percent)
}
