//! Per-tick simulation systems.
//!
//! `tick` owns the tick ordering; the other modules each implement one stage
//! of it. The ordering between stages is load-bearing: most stages read
//! state a previous stage just wrote, and several read last tick's value on
//! purpose (sprint boost, the eye submersion flag).

pub mod damage;
pub mod elytra;
pub mod fluid;
pub mod jump;
pub mod movement;
pub mod pose;
pub mod snow;
pub mod sprint;
pub mod tick;
pub mod travel;

pub use damage::apply_damage;
pub use tick::tick_player;
