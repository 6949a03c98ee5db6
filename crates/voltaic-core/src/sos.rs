//! Cascaded second-order sections.
//!
//! A [`SosFilter`] runs a chain of biquads, each in Direct Form I:
//!
//! ```text
//! y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
//!                - a1*y[n-1] - a2*y[n-2]
//! ```
//!
//! The output of section `k` is the input of section `k + 1`. Coefficients
//! are normalized (`a0 = 1`) and come from the precomputed anti-aliasing
//! tables in [`crate::aafilter`], but any stable cascade can be loaded.
//!
//! The filter is generic over [`Sample`], so one `SosFilter<F32x4, N>`
//! filters four independent signals with identical coefficients.
//!
//! # Example
//!
//! ```rust
//! use voltaic_core::{SosCoefficients, SosFilter};
//!
//! // One section that averages the current and previous sample
//! let avg = SosCoefficients::new([0.5, 0.5, 0.0], [0.0, 0.0]);
//! let mut filter: SosFilter<f32, 4> = SosFilter::new();
//! filter.init(&[avg]);
//! assert_eq!(filter.process(1.0), 0.5);
//! assert_eq!(filter.process(1.0), 1.0);
//! ```

use crate::lanes::Sample;

/// Coefficients of one normalized biquad section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SosCoefficients {
    /// Feedforward coefficients `b0, b1, b2`.
    pub b: [f32; 3],
    /// Feedback coefficients `a1, a2` (`a0` is 1).
    pub a: [f32; 2],
}

impl SosCoefficients {
    /// Section with the given coefficients.
    pub const fn new(b: [f32; 3], a: [f32; 2]) -> Self {
        Self { b, a }
    }

    /// Pass-through section.
    pub const IDENTITY: Self = Self::new([1.0, 0.0, 0.0], [0.0, 0.0]);
}

/// Delay registers of one section.
#[derive(Debug, Clone, Copy, Default)]
struct SectionState<T> {
    x1: T,
    x2: T,
    y1: T,
    y2: T,
}

/// Cascade of up to `MAX` biquad sections.
///
/// # Invariants
///
/// - Only the first `len` entries of `sections`/`state` are live
/// - With no sections loaded the filter is the identity
#[derive(Debug, Clone)]
pub struct SosFilter<T: Sample, const MAX: usize> {
    sections: [SosCoefficients; MAX],
    state: [SectionState<T>; MAX],
    len: usize,
}

impl<T: Sample, const MAX: usize> SosFilter<T, MAX> {
    /// Empty cascade (identity).
    pub fn new() -> Self {
        Self {
            sections: [SosCoefficients::IDENTITY; MAX],
            state: [SectionState::default(); MAX],
            len: 0,
        }
    }

    /// Load a cascade and zero the state.
    ///
    /// Sections beyond `MAX` are ignored.
    pub fn init(&mut self, sections: &[SosCoefficients]) {
        self.len = sections.len().min(MAX);
        self.sections[..self.len].copy_from_slice(&sections[..self.len]);
        self.reset();
    }

    /// Zero every section's delay registers.
    pub fn reset(&mut self) {
        self.state = [SectionState::default(); MAX];
    }

    /// Number of live sections.
    pub fn num_sections(&self) -> usize {
        self.len
    }

    /// Process one sample through the whole cascade.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        let mut x = input;
        for (c, s) in self.sections[..self.len]
            .iter()
            .zip(self.state[..self.len].iter_mut())
        {
            let [b0, b1, b2] = c.b.map(T::splat);
            let [a1, a2] = c.a.map(T::splat);
            let y = b0 * x + b1 * s.x1 + b2 * s.x2 - a1 * s.y1 - a2 * s.y2;
            s.x2 = s.x1;
            s.x1 = x;
            s.y2 = s.y1;
            s.y1 = y;
            x = y;
        }
        x
    }
}

impl<T: Sample, const MAX: usize> Default for SosFilter<T, MAX> {
    fn default() -> Self {
        Self::new()
    }
}
