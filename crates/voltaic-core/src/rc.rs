//! Bilinear one-pole RC filter.
//!
//! Models a passive RC network discretized with the bilinear transform.
//! One update produces both the lowpass (capacitor voltage) and highpass
//! (resistor voltage) responses:
//!
//! ```text
//! c = 1 / (π · f_norm)
//! y[n] = (x[n] + x[n-1] − (1 − c)·y[n-1]) / (1 + c)
//! lowpass  = y[n]
//! highpass = x[n] − y[n]
//! ```
//!
//! Cutoffs are normalized frequencies (`f_c / f_s`). Engines compute
//! `1 / (2π·R·C)` from component values and divide by whatever rate the
//! filter runs at, host or oversampled.
//!
//! ```rust
//! use voltaic_core::RcFilter;
//!
//! let mut rc: RcFilter<f32> = RcFilter::new();
//! rc.set_cutoff_freq(1_000.0 / 48_000.0);
//! for _ in 0..10_000 {
//!     rc.process(1.0);
//! }
//! assert!((rc.lowpass() - 1.0).abs() < 1e-4);
//! assert!(rc.highpass().abs() < 1e-4);
//! ```

use crate::lanes::Sample;
use core::f32::consts::PI;

/// One-pole RC filter with lowpass and highpass taps.
///
/// Generic over [`Sample`]; each lane of an `RcFilter<F32x4>` can have its
/// own cutoff.
///
/// [`F32x4`]: crate::F32x4
#[derive(Debug, Clone, Copy)]
pub struct RcFilter<T: Sample> {
    c: T,
    xstate: T,
    ystate: T,
}

impl<T: Sample> RcFilter<T> {
    /// Create a filter with cutoff at a quarter of the sample rate.
    pub fn new() -> Self {
        let mut rc = Self {
            c: T::ZERO,
            xstate: T::ZERO,
            ystate: T::ZERO,
        };
        rc.set_cutoff_freq(T::splat(0.25));
        rc
    }

    /// Set the cutoff as a normalized frequency (`f_c / f_s`).
    ///
    /// Non-positive cutoffs are not meaningful.
    pub fn set_cutoff_freq(&mut self, f_norm: T) {
        self.c = f_norm.map_lanes(|f| 1.0 / (PI * f));
    }

    /// Advance the filter by one sample.
    #[inline]
    pub fn process(&mut self, x: T) {
        let one = T::splat(1.0);
        let y = (x + self.xstate - self.ystate * (one - self.c)) / (one + self.c);
        self.xstate = x;
        self.ystate = y;
    }

    /// Lowpass output of the last update.
    #[inline]
    pub fn lowpass(&self) -> T {
        self.ystate
    }

    /// Highpass output of the last update.
    #[inline]
    pub fn highpass(&self) -> T {
        self.xstate - self.ystate
    }

    /// Zero the state, keeping the cutoff.
    pub fn reset(&mut self) {
        self.xstate = T::ZERO;
        self.ystate = T::ZERO;
    }
}

impl<T: Sample> Default for RcFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}
