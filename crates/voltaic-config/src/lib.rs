//! Session configuration for voltaic renders.
//!
//! A session names an engine, its knob settings, the bank size, and a test
//! signal. Sessions are TOML files loaded and saved with
//! [`SessionConfig::load`] and [`SessionConfig::save`], and checked with
//! [`validate_session`] before anything is rendered.
//!
//! # Example
//!
//! ```rust,no_run
//! use voltaic_config::{EngineConfig, SessionConfig, validate_session};
//!
//! let mut session = SessionConfig::load("session.toml").unwrap();
//! session.engine = EngineConfig::from_kind("streams").unwrap();
//! validate_session(&session).unwrap();
//! session.save("session.toml").unwrap();
//! ```

mod error;
mod session;

/// Session validation.
pub mod validation;

pub use error::ConfigError;
pub use session::{BandConfig, EngineConfig, SessionConfig, SignalConfig, Waveform};
pub use validation::{
    MAX_VOLTAGE, ValidationError, ValidationResult, validate_engine, validate_session,
};
