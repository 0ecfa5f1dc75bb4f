//! Embedder-facing surface: the simulation driver and its event types.

pub mod driver;
pub mod types;

pub use driver::Simulation;
pub use types::PhysicsEvent;
