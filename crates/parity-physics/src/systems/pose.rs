//! Pose selection and the crouch flag.

use crate::collision::is_space_empty;
use crate::entity::{MovementInput, Player, Pose};
use crate::world::World;

/// Whether the entity would fit in the given pose at its current position.
pub fn fits_pose<W: World>(world: &W, player: &Player, pose: Pose) -> bool {
    let aabb = player.aabb_for(pose).shrink(1.0e-7);
    is_space_empty(world, &player.shape_context(), &aabb)
}

/// Resolve the crouch flag: held sneak, or forced because the standing box
/// does not fit. Swimming overrides crouching entirely.
pub fn resolve_sneaking<W: World>(world: &W, player: &mut Player, input: &MovementInput) {
    player.sneaking = !player.swimming
        && fits_pose(world, player, Pose::Sneaking)
        && (input.sneak || !fits_pose(world, player, Pose::Standing));
}

/// Pick the pose for the tick that just ran, falling back to smaller boxes
/// when the preferred one is obstructed.
pub fn update_pose<W: World>(world: &W, player: &mut Player) {
    let target = if player.gliding {
        Pose::Gliding
    } else if player.swimming {
        Pose::Swimming
    } else if player.sneaking {
        Pose::Sneaking
    } else {
        Pose::Standing
    };

    player.pose = if fits_pose(world, player, target) {
        target
    } else if fits_pose(world, player, Pose::Sneaking) {
        Pose::Sneaking
    } else {
        Pose::Swimming
    };
}
