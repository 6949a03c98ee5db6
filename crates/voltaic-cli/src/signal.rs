//! Test signal generator.

use std::f32::consts::TAU;

use voltaic_config::{SignalConfig, Waveform};
use voltaic_core::Xorshift32;

/// Per-sample source for one [`SignalConfig`].
///
/// Periodic waveforms are naive (not band-limited); the engines' own
/// anti-aliasing is what the renders are meant to exercise.
#[derive(Debug, Clone)]
pub struct TestSignal {
    waveform: Waveform,
    amplitude: f32,
    phase: f32,
    increment: f32,
    noise: Xorshift32,
}

impl TestSignal {
    /// Signal at `sample_rate`, transposed up `semitones`.
    ///
    /// `seed` picks the noise sequence so channels stay uncorrelated.
    pub fn new(config: &SignalConfig, sample_rate: f32, semitones: f32, seed: u32) -> Self {
        let frequency = config.frequency * (semitones / 12.0).exp2();
        Self {
            waveform: config.waveform,
            amplitude: config.amplitude,
            phase: 0.0,
            increment: frequency / sample_rate,
            noise: Xorshift32::new(seed),
        }
    }

    /// Next sample in volts.
    pub fn next_sample(&mut self) -> f32 {
        let unit = match self.waveform {
            Waveform::Sine => (TAU * self.phase).sin(),
            Waveform::Saw => 2.0 * self.phase - 1.0,
            Waveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Noise => 2.0 * self.noise.uniform() - 1.0,
            Waveform::Silence => 0.0,
        };
        self.phase += self.increment;
        self.phase -= self.phase.floor();
        unit * self.amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(waveform: Waveform) -> SignalConfig {
        SignalConfig {
            waveform,
            frequency: 1_000.0,
            amplitude: 2.0,
        }
    }

    #[test]
    fn sine_peaks_at_amplitude() {
        let mut sig = TestSignal::new(&config(Waveform::Sine), 48_000.0, 0.0, 1);
        let peak = (0..480).map(|_| sig.next_sample().abs()).fold(0.0, f32::max);
        assert!((peak - 2.0).abs() < 1e-3, "{peak}");
    }

    #[test]
    fn square_alternates_every_half_period() {
        let mut sig = TestSignal::new(&config(Waveform::Square), 8_000.0, 0.0, 1);
        let cycle: Vec<f32> = (0..8).map(|_| sig.next_sample()).collect();
        assert_eq!(cycle, [2.0, 2.0, 2.0, 2.0, -2.0, -2.0, -2.0, -2.0]);
    }

    #[test]
    fn octave_up_doubles_frequency() {
        let mut sig = TestSignal::new(&config(Waveform::Saw), 48_000.0, 12.0, 1);
        let wraps = (0..48_000)
            .map(|_| sig.next_sample())
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|w| w[1] < w[0])
            .count();
        assert!((1_999..=2_000).contains(&wraps), "{wraps}");
    }

    #[test]
    fn noise_is_bounded_and_seeded() {
        let mut a = TestSignal::new(&config(Waveform::Noise), 48_000.0, 0.0, 7);
        let mut b = TestSignal::new(&config(Waveform::Noise), 48_000.0, 0.0, 8);
        let sa: Vec<f32> = (0..256).map(|_| a.next_sample()).collect();
        let sb: Vec<f32> = (0..256).map(|_| b.next_sample()).collect();
        assert!(sa.iter().all(|x| x.abs() <= 2.0));
        assert_ne!(sa, sb);
    }

    #[test]
    fn silence_is_zero() {
        let mut sig = TestSignal::new(&config(Waveform::Silence), 48_000.0, 0.0, 1);
        assert!((0..64).all(|_| sig.next_sample() == 0.0));
    }
}
