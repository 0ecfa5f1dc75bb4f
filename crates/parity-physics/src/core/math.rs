//! Numeric constants and helpers shared by the whole simulation.
//!
//! The reference client mixes single and double precision: most per-tick
//! factors are `f32` literals that get widened to `f64` at the point of use.
//! Reproducing trajectories bit for bit requires keeping those widenings, so
//! every constant below is written as `LITERALf32 as f64` where the client
//! stores it as a float.

use glam::DVec3;

/// Simulation rate in ticks per second.
pub const TICK_RATE: u32 = 20;

/// Margin used when comparing requested movement against resolved movement.
pub const DEFAULT_MARGIN: f64 = 1.0e-5;

/// Movements (and squared movement lengths) below this are treated as zero.
pub const VELOCITY_EPSILON: f64 = 1.0e-7;

/// Velocity components below this get snapped to zero at the start of a tick.
pub const FLATTEN_THRESHOLD: f64 = 0.003;

/// Downward acceleration per tick, in blocks/tick^2. Stored as a double.
pub const GRAVITY: f64 = 0.08;

/// Gravity while the slow falling effect is active and the entity descends.
pub const SLOW_FALLING_GRAVITY: f64 = 0.01;

/// Vertical velocity drag, applied after gravity every tick.
pub const VERTICAL_DRAG: f64 = 0.98f32 as f64;

/// Horizontal air friction factor.
pub const AIR_FRICTION: f32 = 0.91;

/// Base walking speed attribute value.
pub const BASE_MOVEMENT_SPEED: f64 = 0.1f32 as f64;

/// Input acceleration while airborne.
pub const AIR_ACCELERATION: f32 = 0.02;

/// Input acceleration while airborne and sprinting.
pub const SPRINT_AIR_ACCELERATION: f32 = 0.026;

/// Sprinting movement speed modifier (multiply-total).
pub const SPRINT_MODIFIER: f64 = 0.3f32 as f64;

/// Initial vertical velocity of a jump.
pub const JUMP_POWER: f64 = 0.42f32 as f64;

/// Extra vertical jump velocity per jump boost amplifier step.
pub const JUMP_BOOST_STEP: f64 = 0.1;

/// How high an entity can step up without jumping.
pub const STEP_HEIGHT: f32 = 0.6;

/// Numerator of the ground acceleration formula (`factor / slipperiness^3`).
pub const GROUND_SPEED_FACTOR: f32 = 0.21600002;

/// Slipperiness of every block that does not override it.
pub const DEFAULT_SLIPPERINESS: f32 = 0.6;

/// Fluid height above which jumping swims instead of jumping off the ground.
pub const SWIM_HEIGHT: f64 = 0.4;

/// Speed effect modifier amount per amplifier step (multiply-total).
pub const SPEED_EFFECT_AMOUNT: f64 = 0.2f32 as f64;

/// Slowness effect modifier amount per amplifier step (multiply-total).
pub const SLOWNESS_EFFECT_AMOUNT: f64 = -(0.15f32 as f64);

/// Vertical velocity gained per tick while holding jump in a fluid.
pub const SWIM_UPWARDS_ACCELERATION: f64 = 0.04f32 as f64;

/// Vertical velocity lost per tick while sneaking in water.
pub const SINK_ACCELERATION: f64 = 0.04f32 as f64;

/// Snap near-zero velocity components to zero.
///
/// Keeps residual friction products from producing endless sub-visible drift.
pub fn flatten_velocity(velocity: &mut DVec3) {
    if velocity.x.abs() < FLATTEN_THRESHOLD {
        velocity.x = 0.0;
    }
    if velocity.y.abs() < FLATTEN_THRESHOLD {
        velocity.y = 0.0;
    }
    if velocity.z.abs() < FLATTEN_THRESHOLD {
        velocity.z = 0.0;
    }
}

/// Squared length of the horizontal (x, z) part of a vector.
pub fn horizontal_length_squared(v: DVec3) -> f64 {
    v.x * v.x + v.z * v.z
}
