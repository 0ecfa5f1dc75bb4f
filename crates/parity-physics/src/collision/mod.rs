pub mod field;
pub mod resolve;
pub mod sneak;

pub use field::{collect_collisions, is_space_empty, CollisionField, ShapeContext};
pub use resolve::{collide, collide_with_stepping};
pub use sneak::{back_off_from_edge, is_above_ground};
