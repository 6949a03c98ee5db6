//! Mathematical utility functions for circuit models.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Utilities
//!
//! - [`rescale`] - Map a value from one range to another
//! - [`crossfade`] - Linear interpolation between two values
//! - [`finite_or_zero`] - Replace NaN/infinity with 0 V
//! - [`flush_denormal`] - Denormal protection for recursive state

use libm::{expf, log10f};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use voltaic_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Gains at or below zero return -200 dB.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        return -200.0;
    }
    20.0 * log10f(linear)
}

/// Linearly map `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping is applied; values outside the input range extrapolate.
///
/// # Example
/// ```rust
/// use voltaic_core::rescale;
///
/// assert_eq!(rescale(0.5, 0.0, 1.0, 0.0, -8.0), -4.0);
/// ```
#[inline]
pub fn rescale(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Linear crossfade: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn crossfade(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Return `x` if it is finite, otherwise 0.
///
/// Jack inputs pass through this before reaching any integrator, so a NaN
/// on a patch cable reads as an unpatched 0 V.
#[inline]
pub fn finite_or_zero(x: f32) -> f32 {
    if x.is_finite() { x } else { 0.0 }
}

/// Flush denormal numbers to zero.
///
/// Returns 0.0 for values whose magnitude is below 1e-20, which keeps
/// decaying filter state from dropping into the subnormal range.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
