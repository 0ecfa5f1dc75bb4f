//! Attribute modifier pipeline for effective movement speed.
//!
//! Resolution order: additive amounts first, then multiply-base terms
//! against the unmodified base, then multiply-total factors in insertion
//! order. The result is clamped to the attribute's legal range and narrowed
//! to `f32`, which is the precision the travel code consumes.

use crate::core::math::BASE_MOVEMENT_SPEED;

/// How a modifier combines with the attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierOp {
    AddValue,
    MultiplyBase,
    MultiplyTotal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifier {
    pub amount: f64,
    pub op: ModifierOp,
}

impl Modifier {
    pub fn add(amount: f64) -> Modifier {
        Modifier {
            amount,
            op: ModifierOp::AddValue,
        }
    }

    pub fn multiply_base(amount: f64) -> Modifier {
        Modifier {
            amount,
            op: ModifierOp::MultiplyBase,
        }
    }

    pub fn multiply_total(amount: f64) -> Modifier {
        Modifier {
            amount,
            op: ModifierOp::MultiplyTotal,
        }
    }
}

/// Legal range of the movement speed attribute.
const SPEED_MIN: f64 = 0.0;
const SPEED_MAX: f64 = 1024.0;

/// Resolve an attribute value from its base and an ordered modifier list.
pub fn resolve(base: f64, modifiers: &[Modifier]) -> f64 {
    let mut summed = base;
    for modifier in modifiers {
        if modifier.op == ModifierOp::AddValue {
            summed += modifier.amount;
        }
    }
    let mut total = summed;
    for modifier in modifiers {
        if modifier.op == ModifierOp::MultiplyBase {
            total += base * modifier.amount;
        }
    }
    for modifier in modifiers {
        if modifier.op == ModifierOp::MultiplyTotal {
            total *= 1.0 + modifier.amount;
        }
    }
    total
}

/// Resolve effective movement speed: pipeline, clamp, narrow to `f32`.
pub fn resolve_movement_speed(modifiers: &[Modifier]) -> f32 {
    resolve(BASE_MOVEMENT_SPEED, modifiers).clamp(SPEED_MIN, SPEED_MAX) as f32
}
