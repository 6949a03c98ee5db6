//! Per-sample engine trait.
//!
//! An [`Engine`] models one module's analog signal path. The host fills a
//! frame with knob positions and jack voltages, calls
//! [`Engine::process`] once per audio tick, and reads the output voltages
//! back from the same frame.
//!
//! ## Lifecycle
//!
//! - Construction leaves the engine configured for a default rate
//! - [`Engine::set_sample_rate`] reconfigures filters and resets all state;
//!   calling it twice with the same rate is the same as calling it once
//! - [`Engine::reset`] returns to the quiescent state at the current rate
//!
//! No method allocates, blocks or performs I/O.

/// A per-sample analog circuit model.
///
/// # Example
///
/// ```rust
/// use voltaic_core::Engine;
///
/// #[derive(Default)]
/// struct Inverter;
///
/// #[derive(Default)]
/// struct InverterFrame {
///     input: f32,
///     output: f32,
/// }
///
/// impl Engine for Inverter {
///     type Frame = InverterFrame;
///
///     fn process(&mut self, frame: &mut InverterFrame) {
///         frame.output = -frame.input;
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn sample_rate(&self) -> f32 {
///         48_000.0
///     }
///
///     fn reset(&mut self) {}
///
///     fn outputs_finite(&self, frame: &InverterFrame) -> bool {
///         frame.output.is_finite()
///     }
///
///     fn silence_outputs(&self, frame: &mut InverterFrame) {
///         frame.output = 0.0;
///     }
/// }
///
/// let mut engine = Inverter;
/// let mut frame = InverterFrame { input: 2.0, ..Default::default() };
/// engine.process(&mut frame);
/// assert_eq!(frame.output, -2.0);
/// ```
pub trait Engine {
    /// Parameters, inputs and outputs exchanged every tick.
    type Frame;

    /// Advance the circuit by one host sample.
    ///
    /// Reads parameters and inputs from `frame` and writes its outputs.
    fn process(&mut self, frame: &mut Self::Frame);

    /// Reconfigure for a new host rate and reset all state.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Host rate the engine is configured for.
    fn sample_rate(&self) -> f32;

    /// Return to the quiescent state without changing the rate.
    fn reset(&mut self);

    /// True if every output in `frame` is finite.
    fn outputs_finite(&self, frame: &Self::Frame) -> bool;

    /// Zero every output in `frame`.
    fn silence_outputs(&self, frame: &mut Self::Frame);
}
