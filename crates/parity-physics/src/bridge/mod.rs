//! Interchange with the outside world: recorded tick traces.

pub mod trace;

pub use trace::{record, replay, Divergence, TickRecord, Trace};
