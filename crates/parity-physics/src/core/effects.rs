//! Status effects that feed the movement pipeline.

use serde::{Deserialize, Serialize};

use crate::core::attributes::Modifier;
use crate::core::math::{SLOWNESS_EFFECT_AMOUNT, SPEED_EFFECT_AMOUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Speed,
    Slowness,
    JumpBoost,
    Levitation,
    SlowFalling,
    DolphinsGrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub amplifier: u32,
    /// Remaining duration in ticks.
    pub duration: u32,
}

/// Active effects, in application order.
///
/// Order matters: multiply-total speed modifiers are folded in the order the
/// effects were applied, and double multiplication is not associative at the
/// last bit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectMap {
    entries: Vec<(EffectKind, Effect)>,
}

impl EffectMap {
    pub fn new() -> EffectMap {
        EffectMap::default()
    }

    /// Apply an effect, replacing a previous instance of the same kind in
    /// place (application order is kept from the first application).
    pub fn apply(&mut self, kind: EffectKind, amplifier: u32, duration: u32) {
        let effect = Effect { amplifier, duration };
        for entry in &mut self.entries {
            if entry.0 == kind {
                entry.1 = effect;
                return;
            }
        }
        self.entries.push((kind, effect));
    }

    pub fn remove(&mut self, kind: EffectKind) {
        self.entries.retain(|(k, _)| *k != kind);
    }

    pub fn get(&self, kind: EffectKind) -> Option<&Effect> {
        self.entries.iter().find(|(k, _)| *k == kind).map(|(_, e)| e)
    }

    pub fn has(&self, kind: EffectKind) -> bool {
        self.get(kind).is_some()
    }

    /// Count down durations, dropping expired effects.
    pub fn tick(&mut self) {
        for entry in &mut self.entries {
            entry.1.duration = entry.1.duration.saturating_sub(1);
        }
        self.entries.retain(|(_, e)| e.duration > 0);
    }

    /// Movement speed modifiers contributed by active effects, in
    /// application order.
    pub fn speed_modifiers(&self, out: &mut Vec<Modifier>) {
        for (kind, effect) in &self.entries {
            let amount = match kind {
                EffectKind::Speed => SPEED_EFFECT_AMOUNT,
                EffectKind::Slowness => SLOWNESS_EFFECT_AMOUNT,
                _ => continue,
            };
            out.push(Modifier::multiply_total(amount * (effect.amplifier + 1) as f64));
        }
    }
}
