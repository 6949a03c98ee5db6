//! Voltaic Core - analog circuit modeling primitives
//!
//! This crate provides the building blocks the voltaic engines are made of:
//! oversampling filters, nonlinear component models, integrators and the
//! resampling glue that hosts block-based processors. Nothing in the
//! processing path allocates.
//!
//! # Core Abstractions
//!
//! ## Engines
//!
//! - [`Engine`] - Per-sample circuit model driven by a frame of knobs and jacks
//! - [`EngineBank`] - Up to 16 independent channels with divergence recovery
//!
//! ## Filters
//!
//! - [`SosFilter`] - Cascade of second-order sections
//! - [`AaFilter`] / [`AaFilterPair`] - Per-rate anti-aliasing designs for
//!   oversampled cores
//! - [`RcFilter`] - Bilinear one-pole RC lowpass/highpass
//!
//! ## Circuit Models
//!
//! - [`ota_current`] - OTA transfer with a Padé tanh
//! - [`v_to_i_converter`] - Saturating voltage-to-current converter
//! - [`LowpassCell`] / [`SvfCell`] - VCA-controlled integrator cells
//! - [`step_rk2`] / [`step_rk2_system`] - Midpoint integration
//!
//! ## Resampling
//!
//! - [`DoubleRingBuffer`] - FIFO with contiguous block windows
//! - [`SampleRateConverter`] - Streaming linear rate conversion
//! - [`BlockResampler`] / [`InterpolatingResampler`] - Run a fixed-rate block
//!   processor from a per-sample host
//!
//! ## Lanes
//!
//! Engines evaluate four signal paths at once through [`F32x4`]. Filters and
//! integrators are generic over [`Sample`], implemented for `f32` and
//! [`F32x4`].
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! voltaic-core = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `tracing` feature to log filter configuration and engine
//! recoveries through the `tracing` crate.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod aafilter;
pub mod cells;
pub mod circuit;
pub mod converter;
pub mod engine;
pub mod frame;
pub mod lanes;
pub mod math;
pub mod noise;
pub mod ode;
pub mod poly;
pub mod rc;
pub mod resampler;
pub mod ring;
pub mod slew;
pub mod sos;

// Re-export main types at crate root
pub use aafilter::{
    AaDesign, AaFilter, AaFilterPair, AaProfile, FilterRole, SupportedRate, usable_sample_rate,
};
pub use cells::{LowpassCell, SvfCell};
pub use circuit::{
    V_TO_I_OPEN_BIAS_R, exp_vca_level, ota_current, q_factor_to_voltage, v_to_i_converter,
    vca_level_to_pin_voltage,
};
pub use converter::SampleRateConverter;
pub use engine::Engine;
pub use frame::SampleFrame;
pub use lanes::{F32x4, Sample};
pub use math::{crossfade, db_to_linear, finite_or_zero, flush_denormal, linear_to_db, rescale};
pub use noise::Xorshift32;
pub use ode::{step_rk2, step_rk2_system};
pub use poly::{EngineBank, MAX_CHANNELS};
pub use rc::RcFilter;
pub use resampler::{BlockResampler, InterpolatingResampler};
pub use ring::DoubleRingBuffer;
pub use slew::SlewLimiter;
pub use sos::{SosCoefficients, SosFilter};
