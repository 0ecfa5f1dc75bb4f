pub mod block;
pub mod grid;

pub use block::{BlockState, CollisionKind, ContactEffect, FluidKind, FluidState};
pub use grid::GridWorld;

use glam::IVec3;

/// Read access to world geometry.
///
/// Unloaded or absent positions return `None` and behave as open space; the
/// resolver never treats missing data as an error.
pub trait World {
    fn block(&self, position: IVec3) -> Option<&BlockState>;
}

impl<W: World + ?Sized> World for &W {
    fn block(&self, position: IVec3) -> Option<&BlockState> {
        (**self).block(position)
    }
}
