//! Streaming linear-interpolation sample-rate converter.
//!
//! [`SampleRateConverter`] converts a stream of [`SampleFrame`]s between two
//! arbitrary rates. Each call consumes as much input and fills as much output
//! as possible and reports both counts, so callers can drive it from ring
//! buffers without knowing the exact ratio in advance.
//!
//! ```rust
//! use voltaic_core::{SampleFrame, SampleRateConverter};
//!
//! let mut src: SampleRateConverter<1> = SampleRateConverter::new(48_000.0, 24_000.0);
//! let input = [SampleFrame::new([1.0]); 8];
//! let mut output = [SampleFrame::SILENCE; 8];
//! let (consumed, produced) = src.process(&input, &mut output);
//! assert_eq!(consumed, 8);
//! assert_eq!(produced, 4);
//! ```

use crate::frame::SampleFrame;

/// Linear-interpolating rate converter for `N` channels.
///
/// Output lags input by one input frame.
#[derive(Debug, Clone)]
pub struct SampleRateConverter<const N: usize> {
    step: f32,
    phase: f32,
    prev: SampleFrame<N>,
    next: SampleFrame<N>,
}

impl<const N: usize> SampleRateConverter<N> {
    /// Converter from `in_rate` to `out_rate` (Hz).
    pub fn new(in_rate: f32, out_rate: f32) -> Self {
        let mut src = Self {
            step: 1.0,
            phase: 1.0,
            prev: SampleFrame::SILENCE,
            next: SampleFrame::SILENCE,
        };
        src.set_rates(in_rate, out_rate);
        src
    }

    /// Change rates and clear the interpolation state.
    pub fn set_rates(&mut self, in_rate: f32, out_rate: f32) {
        self.step = in_rate / out_rate;
        self.reset();
    }

    /// Input frames advanced per output frame.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Forget all history.
    pub fn reset(&mut self) {
        self.phase = 1.0;
        self.prev = SampleFrame::SILENCE;
        self.next = SampleFrame::SILENCE;
    }

    /// Convert as much as possible.
    ///
    /// # Returns
    /// `(consumed, produced)`: input frames read and output frames written.
    pub fn process(
        &mut self,
        input: &[SampleFrame<N>],
        output: &mut [SampleFrame<N>],
    ) -> (usize, usize) {
        let mut consumed = 0;
        let mut produced = 0;
        while produced < output.len() {
            while self.phase >= 1.0 {
                let Some(frame) = input.get(consumed) else {
                    return (consumed, produced);
                };
                self.prev = self.next;
                self.next = *frame;
                self.phase -= 1.0;
                consumed += 1;
            }
            output[produced] = SampleFrame::crossfade(&self.prev, &self.next, self.phase);
            produced += 1;
            self.phase += self.step;
        }
        (consumed, produced)
    }
}
