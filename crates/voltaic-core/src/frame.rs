//! Fixed-width multichannel sample.

use crate::math::crossfade;

/// One sample period of `N` channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleFrame<const N: usize> {
    /// Channel values.
    pub samples: [f32; N],
}

impl<const N: usize> SampleFrame<N> {
    /// All channels zero.
    pub const SILENCE: Self = Self { samples: [0.0; N] };

    /// Frame from channel values.
    pub const fn new(samples: [f32; N]) -> Self {
        Self { samples }
    }

    /// Channel-wise linear interpolation, `a` at `t = 0`, `b` at `t = 1`.
    #[inline]
    pub fn crossfade(a: &Self, b: &Self, t: f32) -> Self {
        Self {
            samples: core::array::from_fn(|i| crossfade(a.samples[i], b.samples[i], t)),
        }
    }
}

impl<const N: usize> Default for SampleFrame<N> {
    fn default() -> Self {
        Self::SILENCE
    }
}

impl<const N: usize> From<[f32; N]> for SampleFrame<N> {
    fn from(samples: [f32; N]) -> Self {
        Self { samples }
    }
}
