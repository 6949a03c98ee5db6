//! Explicit second-order Runge-Kutta (midpoint) integration.
//!
//! ```text
//! k1 = f(y)
//! k2 = f(y + k1·dt/2)
//! y' = y + dt·k2
//! ```
//!
//! The derivative closures used by the circuit models are autonomous; time
//! dependence enters through values captured from the enclosing sub-step.

use crate::lanes::Sample;

/// Advance one state value by `dt`.
///
/// # Example
///
/// ```rust
/// use voltaic_core::step_rk2;
///
/// // dy/dt = -y from y = 1, ten steps of 0.1 s
/// let mut y = 1.0_f32;
/// for _ in 0..10 {
///     y = step_rk2(0.1, y, |y| -y);
/// }
/// assert!((y - (-1.0_f32).exp()).abs() < 2e-3);
/// ```
#[inline]
pub fn step_rk2<T: Sample>(dt: f32, y: T, f: impl Fn(T) -> T) -> T {
    let dt = T::splat(dt);
    let half = dt * T::splat(0.5);
    let k1 = f(y);
    let k2 = f(y + k1 * half);
    y + dt * k2
}

/// Advance a coupled system of `N` state values by `dt`.
#[inline]
pub fn step_rk2_system<T: Sample, const N: usize>(
    dt: f32,
    y: [T; N],
    f: impl Fn(&[T; N]) -> [T; N],
) -> [T; N] {
    let dt = T::splat(dt);
    let half = dt * T::splat(0.5);
    let k1 = f(&y);
    let mid: [T; N] = core::array::from_fn(|i| y[i] + k1[i] * half);
    let k2 = f(&mid);
    core::array::from_fn(|i| y[i] + dt * k2[i])
}
