//! Table-based trigonometry matching the reference client.
//!
//! The client never calls libm sin/cos for movement. It looks angles up in a
//! 65536-entry table of `f32` sines indexed by the high 16 bits of the scaled
//! angle. The table quantization is visible in every rotated trajectory, so
//! the simulation has to use the exact same lookup.

use std::sync::OnceLock;

use glam::DVec3;

/// Degrees to radians conversion factor, as the client stores it (f32).
pub const DEG_TO_RAD: f32 = 0.017453292;

/// Scale factor from radians to table index space: 65536 / 2pi.
const TABLE_SCALE: f32 = 10430.378;

static SIN_TABLE: OnceLock<Vec<f32>> = OnceLock::new();

fn table() -> &'static [f32] {
    SIN_TABLE.get_or_init(|| {
        (0..65536)
            .map(|i| (i as f64 * std::f64::consts::PI * 2.0 / 65536.0).sin() as f32)
            .collect()
    })
}

/// Table sine of an angle in radians.
pub fn sin(angle: f32) -> f32 {
    table()[((angle * TABLE_SCALE) as i32 & 0xFFFF) as usize]
}

/// Table cosine of an angle in radians (sine shifted by a quarter table).
pub fn cos(angle: f32) -> f32 {
    table()[((angle * TABLE_SCALE + 16384.0) as i32 & 0xFFFF) as usize]
}

/// View direction for a yaw/pitch pair, in degrees.
///
/// Components are products of widened `f32` factors, matching the client's
/// rotation vector math.
pub fn view_vector(yaw: f32, pitch: f32) -> DVec3 {
    let pitch_rad = pitch * DEG_TO_RAD;
    let yaw_rad = -yaw * DEG_TO_RAD;
    let cos_yaw = cos(yaw_rad) as f64;
    let sin_yaw = sin(yaw_rad) as f64;
    let cos_pitch = cos(pitch_rad) as f64;
    let sin_pitch = sin(pitch_rad) as f64;
    DVec3::new(sin_yaw * cos_pitch, -sin_pitch, cos_yaw * cos_pitch)
}
