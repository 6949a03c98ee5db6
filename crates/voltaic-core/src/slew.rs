//! Rise/fall slew limiter.

/// Limits how fast a signal may rise and fall.
///
/// Rates are in units per second; each call advances time by `dt` seconds.
/// Used to give indicator lights a fast attack and slow release.
///
/// ```rust
/// use voltaic_core::SlewLimiter;
///
/// let mut slew = SlewLimiter::new(1.0 / 2e-3, 1.0 / 10e-3);
/// // A 1 ms step lifts the output halfway to 1 with a 2 ms rise time.
/// assert!((slew.process(1.0, 1e-3) - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlewLimiter {
    rise: f32,
    fall: f32,
    out: f32,
}

impl SlewLimiter {
    /// Create a limiter with the given rise and fall rates.
    pub fn new(rise: f32, fall: f32) -> Self {
        Self {
            rise,
            fall,
            out: 0.0,
        }
    }

    /// Move toward `input` by at most the allowed slope over `dt`.
    #[inline]
    pub fn process(&mut self, input: f32, dt: f32) -> f32 {
        self.out = input.clamp(self.out - self.fall * dt, self.out + self.rise * dt);
        self.out
    }

    /// Current output.
    pub fn value(&self) -> f32 {
        self.out
    }

    /// Drop the output back to zero.
    pub fn reset(&mut self) {
        self.out = 0.0;
    }
}
