pub mod api;
pub mod bridge;
pub mod collision;
pub mod core;
pub mod entity;
pub mod systems;
pub mod world;

// Re-export key types at crate root for convenience
pub use api::driver::Simulation;
pub use api::types::PhysicsEvent;
pub use bridge::trace::{record, replay, Divergence, TickRecord, Trace};
pub use collision::field::{collect_collisions, is_space_empty, CollisionField, ShapeContext};
pub use core::aabb::{Aabb, Axis};
pub use core::attributes::{Modifier, ModifierOp};
pub use core::effects::{Effect, EffectKind, EffectMap};
pub use entity::input::{InputActions, MovementInput};
pub use entity::state::{Abilities, Equipment, Player, Pose};
pub use systems::{apply_damage, tick_player};
pub use world::block::{BlockState, CollisionKind, ContactEffect, FluidKind, FluidState};
pub use world::grid::GridWorld;
pub use world::World;
