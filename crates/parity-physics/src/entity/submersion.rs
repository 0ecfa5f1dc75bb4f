//! Fluid submersion scanning.
//!
//! The hitbox is shrunk slightly before the scan so a box resting exactly on
//! a block boundary does not pick up fluids from the neighboring column.
//! Fluid surface heights are computed in `f32` and widened, matching the
//! reference arithmetic.

use glam::IVec3;

use crate::world::{FluidKind, World};

use super::state::Player;

const SCAN_SHRINK: f64 = 0.001;

/// Offset below the eye position at which the eye fluid check samples.
const EYE_FLUID_OFFSET: f64 = 0.1111111119270325;

/// Height of the given fluid above the hitbox bottom, zero when dry.
pub fn fluid_height<W: World>(world: &W, player: &Player, kind: FluidKind) -> f64 {
    let aabb = player.aabb().shrink(SCAN_SHRINK);
    let mut height = 0.0f64;

    for position in aabb.blocks() {
        let Some(fluid) = world.block(position).and_then(|b| b.fluid) else {
            continue;
        };
        if fluid.kind != kind {
            continue;
        }
        let above = world
            .block(position + IVec3::Y)
            .and_then(|b| b.fluid)
            .is_some_and(|f| f.kind == kind);
        let surface = if above { 1.0f32 } else { fluid.height() };
        let top = (position.y as f32 + surface) as f64;
        if top >= aabb.min.y {
            height = height.max(top - aabb.min.y);
        }
    }

    height
}

fn eyes_in_water<W: World>(world: &W, player: &Player) -> bool {
    let sample_y = player.eye_y() - EYE_FLUID_OFFSET;
    let position = IVec3::new(
        player.position.x.floor() as i32,
        sample_y.floor() as i32,
        player.position.z.floor() as i32,
    );
    let Some(fluid) = world.block(position).and_then(|b| b.fluid) else {
        return false;
    };
    if fluid.kind != FluidKind::Water {
        return false;
    }
    let top = (position.y as f32 + fluid.height()) as f64;
    top > sample_y
}

fn resolve_primary(player: &mut Player) {
    player.primary_fluid = if player.water_height > 0.0 {
        Some(FluidKind::Water)
    } else if player.lava_height > 0.0 {
        Some(FluidKind::Lava)
    } else {
        None
    };
}

/// Per-tick submersion update. The eye flag is lagged by one tick: sprint
/// and swim logic read the value committed here while the fresh sample only
/// becomes visible next tick.
pub fn update_submersion<W: World>(world: &W, player: &mut Player) {
    player.water_height = fluid_height(world, player, FluidKind::Water);
    player.lava_height = fluid_height(world, player, FluidKind::Lava);
    resolve_primary(player);

    player.eye_in_water = player.eye_in_water_next;
    player.eye_in_water_next = eyes_in_water(world, player);
}

/// Mid-move rescan: an entity that was dry when the tick started checks
/// again after landing so the same tick registers the splash.
pub fn refresh_water_state<W: World>(world: &W, player: &mut Player) {
    if player.water_height <= 0.0 {
        player.water_height = fluid_height(world, player, FluidKind::Water);
        resolve_primary(player);
    }
}
