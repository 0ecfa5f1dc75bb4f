pub mod aabb;
pub mod attributes;
pub mod effects;
pub mod math;
pub mod trig;
