//! Player entity state, movement input and fluid submersion tracking.

pub mod input;
pub mod state;
pub mod submersion;

pub use input::{InputActions, MovementInput};
pub use state::{Abilities, Equipment, Player, Pose};
