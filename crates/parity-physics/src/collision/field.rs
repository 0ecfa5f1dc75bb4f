//! Collision shape collection.
//!
//! A query gathers every world-space block sub-box the moving bounding box
//! could touch along its movement, once, and the sweep then resolves all
//! three axes against that set. Shapes already intersecting the box at rest
//! are dropped so a clipped entity can free itself.

use glam::{DVec3, IVec3};

use crate::core::aabb::{Aabb, Axis};
use crate::world::{BlockState, CollisionKind, World};

/// Entity context needed by context-dependent block shapes (powder snow).
#[derive(Debug, Clone, Copy)]
pub struct ShapeContext {
    pub fall_distance: f32,
    /// Wearing leather boots: may stand on top of powder snow.
    pub walks_on_powder_snow: bool,
    /// Holding the sneak input (intentionally descending).
    pub descending: bool,
    /// Bottom of the querying entity's bounding box.
    pub feet_y: f64,
}

impl ShapeContext {
    /// Context for queries with no entity attached (pose probing uses the
    /// querying entity's own values instead).
    pub fn detached() -> ShapeContext {
        ShapeContext {
            fall_distance: 0.0,
            walks_on_powder_snow: false,
            descending: false,
            feet_y: f64::NEG_INFINITY,
        }
    }
}

/// Height of the cushioning shape powder snow presents to entities that
/// already fell far enough.
const POWDER_SNOW_CUSHION_HEIGHT: f64 = 0.9f32 as f64;

/// Resolve the collision box of one block state, in block-local space.
pub fn collision_shape(state: &BlockState, context: &ShapeContext, position: IVec3) -> Option<Aabb> {
    match &state.collision {
        CollisionKind::None => None,
        CollisionKind::Full => Some(Aabb::FULL_BLOCK),
        CollisionKind::Boxed(aabb) => Some(*aabb),
        CollisionKind::PowderSnow => {
            if context.fall_distance > 2.5 {
                return Some(Aabb::from_coords(0.0, 0.0, 0.0, 1.0, POWDER_SNOW_CUSHION_HEIGHT, 1.0));
            }
            let above = context.feet_y > position.y as f64 + 1.0 - 1.0e-5;
            if context.walks_on_powder_snow && above && !context.descending {
                return Some(Aabb::FULL_BLOCK);
            }
            None
        }
    }
}

/// The set of world-space boxes admitted for one movement query.
#[derive(Debug, Default)]
pub struct CollisionField {
    shapes: Vec<Aabb>,
}

impl CollisionField {
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn intersects(&self, aabb: &Aabb) -> bool {
        self.shapes.iter().any(|shape| shape.intersects(aabb))
    }

    /// Clamp a movement distance along one axis against every shape.
    pub fn max_distance(&self, moving: &Aabb, mut distance: f64, axis: Axis) -> f64 {
        for shape in &self.shapes {
            distance = shape.max_offset(moving, distance, axis);
        }
        distance
    }
}

/// Gather every shape the box could touch while performing `movement`.
pub fn collect_collisions<W: World>(
    world: &W,
    context: &ShapeContext,
    movement: DVec3,
    aabb: &Aabb,
) -> CollisionField {
    let mut shapes = Vec::new();
    for position in aabb.extend(movement).grow(1.0).blocks() {
        let Some(state) = world.block(position) else {
            continue;
        };
        let Some(shape) = collision_shape(state, context, position) else {
            continue;
        };
        let shape = shape.offset(position.as_dvec3());
        if aabb.contains_block(position) && shape.intersects(aabb) {
            continue;
        }
        shapes.push(shape);
    }
    CollisionField { shapes }
}

/// Whether no block shape strictly intersects the box.
pub fn is_space_empty<W: World>(world: &W, context: &ShapeContext, aabb: &Aabb) -> bool {
    for position in aabb.blocks() {
        let Some(state) = world.block(position) else {
            continue;
        };
        let Some(shape) = collision_shape(state, context, position) else {
            continue;
        };
        if shape.offset(position.as_dvec3()).intersects(aabb) {
            return false;
        }
    }
    true
}
