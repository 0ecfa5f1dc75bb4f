//! Sparse block storage for tests and standalone simulations.

use std::collections::HashMap;

use glam::IVec3;

use super::block::BlockState;
use super::World;

/// Hash-map backed world. Everything not set is open space.
#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    blocks: HashMap<IVec3, BlockState>,
}

impl GridWorld {
    pub fn new() -> GridWorld {
        GridWorld::default()
    }

    pub fn set(&mut self, position: IVec3, state: BlockState) {
        self.blocks.insert(position, state);
    }

    pub fn clear(&mut self, position: IVec3) {
        self.blocks.remove(&position);
    }

    /// Fill an inclusive block region with copies of a state.
    pub fn fill(&mut self, min: IVec3, max: IVec3, state: BlockState) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.blocks.insert(IVec3::new(x, y, z), state.clone());
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl World for GridWorld {
    fn block(&self, position: IVec3) -> Option<&BlockState> {
        self.blocks.get(&position)
    }
}
