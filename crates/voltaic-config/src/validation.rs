//! Session validation.
//!
//! Parsing accepts any number in any field; [`validate_session`] checks
//! that the values describe a render the engines can run. Every problem is
//! reported, not just the first.
//!
//! # Example
//!
//! ```rust
//! use voltaic_config::{SessionConfig, ValidationError, validate_session};
//!
//! let mut session = SessionConfig::default();
//! validate_session(&session).expect("defaults are valid");
//!
//! session.channels = 32;
//! assert!(matches!(
//!     validate_session(&session),
//!     Err(ValidationError::OutOfRange { .. })
//! ));
//! ```

use thiserror::Error;
use voltaic_core::MAX_CHANNELS;

use crate::session::{BandConfig, EngineConfig, SessionConfig, Waveform};

/// Highest jack voltage a session may specify.
pub const MAX_VOLTAGE: f32 = 10.0;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Value outside its allowed range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Dotted path of the field.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// NaN or infinite value.
    #[error("parameter '{param}' is not finite")]
    NonFinite {
        /// Dotted path of the field.
        param: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Accumulates range checks for one session.
#[derive(Default)]
struct Checker {
    errors: Vec<ValidationError>,
}

impl Checker {
    fn range(&mut self, param: impl Into<String>, value: f32, min: f32, max: f32) {
        if !value.is_finite() {
            self.errors.push(ValidationError::NonFinite {
                param: param.into(),
            });
        } else if !(min..=max).contains(&value) {
            self.errors.push(ValidationError::OutOfRange {
                param: param.into(),
                value,
                min,
                max,
            });
        }
    }

    fn knob(&mut self, param: impl Into<String>, value: f32) {
        self.range(param, value, 0.0, 1.0);
    }

    fn bipolar(&mut self, param: impl Into<String>, value: f32) {
        self.range(param, value, -1.0, 1.0);
    }

    fn voltage(&mut self, param: impl Into<String>, value: Option<f32>) {
        if let Some(v) = value {
            self.range(param, v, -MAX_VOLTAGE, MAX_VOLTAGE);
        }
    }

    fn band(&mut self, name: &str, band: &BandConfig) {
        self.knob(format!("engine.{name}.freq"), band.freq);
        self.bipolar(format!("engine.{name}.gain"), band.gain);
        self.knob(format!("engine.{name}.q"), band.q);
    }

    fn finish(mut self) -> ValidationResult<()> {
        match self.errors.len() {
            0 => Ok(()),
            1 => Err(self.errors.remove(0)),
            _ => Err(ValidationError::Multiple(self.errors)),
        }
    }
}

/// Validate engine knob and CV settings.
pub fn validate_engine(engine: &EngineConfig) -> ValidationResult<()> {
    let mut check = Checker::default();
    check_engine(&mut check, engine);
    check.finish()
}

fn check_engine(check: &mut Checker, engine: &EngineConfig) {
    match engine {
        EngineConfig::Ripples {
            res,
            freq,
            fm,
            gain_cv,
        } => {
            check.knob("engine.res", *res);
            check.knob("engine.freq", *freq);
            check.bipolar("engine.fm", *fm);
            check.voltage("engine.gain_cv", *gain_cv);
        }
        EngineConfig::Shelves {
            low_shelf,
            p1,
            p2,
            high_shelf,
            ..
        } => {
            check.band("low_shelf", low_shelf);
            check.band("p1", p1);
            check.band("p2", p2);
            check.band("high_shelf", high_shelf);
        }
        EngineConfig::Streams {
            level_mod,
            response,
            level_cv,
        } => {
            check.knob("engine.level_mod", *level_mod);
            check.knob("engine.response", *response);
            check.voltage("engine.level_cv", *level_cv);
        }
    }
}

/// Validate a whole session.
///
/// Checks the channel count (1 to 16), a positive sample rate and duration,
/// every knob against its range, CVs and signal amplitude within ±10 V, and
/// a periodic signal frequency between 0 and Nyquist.
pub fn validate_session(session: &SessionConfig) -> ValidationResult<()> {
    let mut check = Checker::default();

    if session.sample_rate == 0 {
        check.errors.push(ValidationError::OutOfRange {
            param: "sample_rate".to_string(),
            value: 0.0,
            min: 1.0,
            max: u32::MAX as f32,
        });
    }
    check.range(
        "channels",
        session.channels as f32,
        1.0,
        MAX_CHANNELS as f32,
    );
    check.range("duration_secs", session.duration_secs, f32::MIN_POSITIVE, f32::MAX);

    check_engine(&mut check, &session.engine);

    let signal = &session.signal;
    check.range("signal.amplitude", signal.amplitude, -MAX_VOLTAGE, MAX_VOLTAGE);
    if matches!(
        signal.waveform,
        Waveform::Sine | Waveform::Saw | Waveform::Square
    ) {
        let nyquist = (session.sample_rate as f32 / 2.0).max(f32::MIN_POSITIVE);
        check.range("signal.frequency", signal.frequency, f32::MIN_POSITIVE, nyquist);
    }

    check.finish()
}
