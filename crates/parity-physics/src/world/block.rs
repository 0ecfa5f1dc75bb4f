//! Block state descriptors: collision volume, fluid payload and the handful
//! of per-block movement properties the resolver cares about.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::aabb::Aabb;
use crate::core::math::DEFAULT_SLIPPERINESS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidKind {
    Water,
    Lava,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidState {
    pub kind: FluidKind,
    /// 0 is a source block; 1..7 are flowing levels; 8+ is falling fluid.
    pub level: u8,
}

impl FluidState {
    /// Surface height of this fluid inside its own block, in [0, 1).
    ///
    /// Falling fluid fills 8/9 like a source; flowing levels shrink by one
    /// ninth per level. Narrowed to `f32` like the client's height math.
    pub fn height(&self) -> f32 {
        if self.level >= 8 {
            return 8.0f32 / 9.0;
        }
        (8 - self.level) as f32 / 9.0
    }
}

/// Collision volume of a block, before entity context is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionKind {
    /// No collision at all (air, fluids, ladders).
    None,
    /// The full unit cube.
    Full,
    /// A single sub-box (slabs, snow layers).
    Boxed(Aabb),
    /// Powder snow: shape depends on the touching entity.
    PowderSnow,
}

/// Side effect a block applies to entities whose bounding box touches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactEffect {
    /// Slow movement to the given per-axis multiplier and reset fall
    /// distance (powder snow, cobwebs, sweet berry bushes).
    SlowMovement { multiplier: DVec3 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockState {
    pub collision: CollisionKind,
    pub fluid: Option<FluidState>,
    pub slipperiness: f32,
    pub velocity_multiplier: f32,
    pub climbable: bool,
    pub contact_effect: Option<ContactEffect>,
}

impl BlockState {
    fn solid(collision: CollisionKind) -> BlockState {
        BlockState {
            collision,
            fluid: None,
            slipperiness: DEFAULT_SLIPPERINESS,
            velocity_multiplier: 1.0,
            climbable: false,
            contact_effect: None,
        }
    }

    /// Plain full cube, default slipperiness.
    pub fn stone() -> BlockState {
        BlockState::solid(CollisionKind::Full)
    }

    /// Full cube with a custom slipperiness (ice, slime).
    pub fn slippery(slipperiness: f32) -> BlockState {
        BlockState {
            slipperiness,
            ..BlockState::solid(CollisionKind::Full)
        }
    }

    /// Bottom half slab.
    pub fn slab_bottom() -> BlockState {
        BlockState::solid(CollisionKind::Boxed(Aabb::from_coords(
            0.0, 0.0, 0.0, 1.0, 0.5, 1.0,
        )))
    }

    /// Top half slab.
    pub fn slab_top() -> BlockState {
        BlockState::solid(CollisionKind::Boxed(Aabb::from_coords(
            0.0, 0.5, 0.0, 1.0, 1.0, 1.0,
        )))
    }

    /// Layered snow. One layer has no collision; every further layer adds
    /// an eighth of a block.
    pub fn snow_layers(layers: u8) -> BlockState {
        debug_assert!((1..=8).contains(&layers));
        if layers <= 1 {
            return BlockState::solid(CollisionKind::None);
        }
        let height = (layers - 1) as f64 * 0.125;
        BlockState::solid(CollisionKind::Boxed(Aabb::from_coords(
            0.0, 0.0, 0.0, 1.0, height, 1.0,
        )))
    }

    pub fn water(level: u8) -> BlockState {
        BlockState {
            fluid: Some(FluidState {
                kind: FluidKind::Water,
                level,
            }),
            ..BlockState::solid(CollisionKind::None)
        }
    }

    pub fn lava(level: u8) -> BlockState {
        BlockState {
            fluid: Some(FluidState {
                kind: FluidKind::Lava,
                level,
            }),
            ..BlockState::solid(CollisionKind::None)
        }
    }

    pub fn ladder() -> BlockState {
        BlockState {
            climbable: true,
            ..BlockState::solid(CollisionKind::None)
        }
    }

    pub fn powder_snow() -> BlockState {
        BlockState {
            collision: CollisionKind::PowderSnow,
            contact_effect: Some(ContactEffect::SlowMovement {
                multiplier: DVec3::new(0.9f32 as f64, 1.5, 0.9f32 as f64),
            }),
            ..BlockState::solid(CollisionKind::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluid_heights() {
        assert_eq!(FluidState { kind: FluidKind::Water, level: 0 }.height() as f64, 0.8888888955116272);
        assert_eq!(FluidState { kind: FluidKind::Lava, level: 7 }.height() as f64, 0.1111111119389534);
        assert_eq!(FluidState { kind: FluidKind::Water, level: 9 }.height(), FluidState { kind: FluidKind::Water, level: 8 }.height());
    }

    #[test]
    fn snow_layer_shapes() {
        assert_eq!(BlockState::snow_layers(1).collision, CollisionKind::None);
        let four = BlockState::snow_layers(4);
        match four.collision {
            CollisionKind::Boxed(aabb) => assert_eq!(aabb.max.y, 0.375),
            _ => panic!("expected a box"),
        }
    }

    #[test]
    fn powder_snow_multiplier_is_widened() {
        let snow = BlockState::powder_snow();
        match snow.contact_effect {
            Some(ContactEffect::SlowMovement { multiplier }) => {
                assert_eq!(multiplier.x, 0.8999999761581421);
                assert_eq!(multiplier.y, 1.5);
            }
            None => panic!("powder snow slows movement"),
        }
    }
}
