//! Numeric `f32` constants.

pub use std::f32::consts::*;

pub const TWO_PI: f32 = TAU;
pub const HALF_PI: f32 = FRAC_PI_2;

/// Multiplication factor for converting degrees to radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Multiplication factor for converting radians to degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;
