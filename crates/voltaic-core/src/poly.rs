//! Polyphonic engine bank with divergence recovery.
//!
//! [`EngineBank`] runs one independent [`Engine`] per channel, up to
//! [`MAX_CHANNELS`]. Channels share nothing; the caller builds a frame per
//! channel.
//!
//! Every call checks the outputs. If any is non-finite the channel's engine
//! is rebuilt from scratch at the current rate and that tick's outputs are
//! silenced, so a numerical blow-up costs one silent sample instead of a
//! permanently dead voice.

use crate::engine::Engine;

/// Most channels a bank can run.
pub const MAX_CHANNELS: usize = 16;

/// Up to [`MAX_CHANNELS`] engines of one type.
///
/// # Example
///
/// ```rust
/// use voltaic_core::{Engine, EngineBank};
///
/// /// Gain stage whose gain is a frame knob.
/// #[derive(Default)]
/// struct Gain {
///     rate: f32,
/// }
///
/// #[derive(Clone, Default)]
/// struct GainFrame {
///     gain: f32,
///     input: f32,
///     output: f32,
/// }
///
/// impl Engine for Gain {
///     type Frame = GainFrame;
///
///     fn process(&mut self, frame: &mut GainFrame) {
///         frame.output = frame.gain * frame.input;
///     }
///
///     fn set_sample_rate(&mut self, sample_rate: f32) {
///         self.rate = sample_rate;
///     }
///
///     fn sample_rate(&self) -> f32 {
///         self.rate
///     }
///
///     fn reset(&mut self) {}
///
///     fn outputs_finite(&self, frame: &GainFrame) -> bool {
///         frame.output.is_finite()
///     }
///
///     fn silence_outputs(&self, frame: &mut GainFrame) {
///         frame.output = 0.0;
///     }
/// }
///
/// let mut bank: EngineBank<Gain> = EngineBank::new(48_000.0);
/// bank.set_channels(4);
/// let mut frames = vec![GainFrame { gain: 2.0, input: 1.0, output: 0.0 }; 4];
/// frames[3].gain = f32::NAN;
/// for (channel, frame) in frames.iter_mut().enumerate() {
///     bank.process(channel, frame);
/// }
/// assert_eq!(frames[0].output, 2.0);
/// // The diverged channel was rebuilt and its output silenced.
/// assert_eq!(frames[3].output, 0.0);
/// assert_eq!(bank.recoveries(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EngineBank<E: Engine + Default> {
    engines: [E; MAX_CHANNELS],
    channels: usize,
    sample_rate: f32,
    recoveries: u64,
}

impl<E: Engine + Default> EngineBank<E> {
    /// One active channel configured for `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        let mut bank = Self {
            engines: core::array::from_fn(|_| E::default()),
            channels: 1,
            sample_rate,
            recoveries: 0,
        };
        bank.set_sample_rate(sample_rate);
        bank
    }

    /// Set the active channel count, clamped to `1..=MAX_CHANNELS`.
    ///
    /// Newly activated channels start from the quiescent state.
    pub fn set_channels(&mut self, channels: usize) {
        let channels = channels.clamp(1, MAX_CHANNELS);
        for engine in &mut self.engines[self.channels.min(channels)..channels] {
            engine.reset();
        }
        self.channels = channels;
    }

    /// Active channel count.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Reconfigure every engine for `sample_rate`.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        for engine in &mut self.engines {
            engine.set_sample_rate(sample_rate);
        }
    }

    /// Configured host rate.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Reset every engine to its quiescent state.
    pub fn reset(&mut self) {
        for engine in &mut self.engines {
            engine.reset();
        }
    }

    /// Process one tick for `channel`.
    ///
    /// Inactive channels leave the frame's outputs silenced.
    pub fn process(&mut self, channel: usize, frame: &mut E::Frame) {
        let Some(engine) = self.engines[..self.channels].get_mut(channel) else {
            self.engines[0].silence_outputs(frame);
            return;
        };

        engine.process(frame);

        if !engine.outputs_finite(frame) {
            *engine = E::default();
            engine.set_sample_rate(self.sample_rate);
            engine.silence_outputs(frame);
            self.recoveries += 1;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "engine_recover: channel {channel} rebuilt at {} Hz ({} total)",
                self.sample_rate,
                self.recoveries
            );
        }
    }

    /// Number of times any channel has been rebuilt.
    pub fn recoveries(&self) -> u64 {
        self.recoveries
    }

    /// Engine for `channel`, if active.
    pub fn engine(&self, channel: usize) -> Option<&E> {
        self.engines[..self.channels].get(channel)
    }

    /// Mutable engine for `channel`, if active.
    pub fn engine_mut(&mut self, channel: usize) -> Option<&mut E> {
        self.engines[..self.channels].get_mut(channel)
    }
}
