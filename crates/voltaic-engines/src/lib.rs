//! Voltaic Engines - analog module emulations
//!
//! Each engine models one Eurorack module's analog signal path on top of
//! voltaic-core:
//!
//! - [`RipplesEngine`] - Four-pole OTA ladder lowpass with BP2/LP2/LP4 taps
//!   and an output VCA
//! - [`ShelvesEngine`] - Two shelving and two parametric bands around a
//!   shared exponential frequency and Q control
//! - [`StreamsEngine`] - Dual VCA / low-pass gate hosting a block-based
//!   [`DigitalSection`]; [`StreamsAnalogEngine`] is the analog half alone
//!
//! Every engine implements [`voltaic_core::Engine`]: fill a frame with knob
//! positions (0 to 1) and jack voltages, call `process` once per host sample
//! and read the output voltages back. Wrap an engine in
//! [`voltaic_core::EngineBank`] for polyphonic use.
//!
//! ## Example
//!
//! ```rust
//! use voltaic_core::EngineBank;
//! use voltaic_engines::{RipplesEngine, RipplesFrame};
//!
//! let mut bank: EngineBank<RipplesEngine> = EngineBank::new(44_100.0);
//! bank.set_channels(2);
//!
//! let mut frame = RipplesFrame {
//!     freq_knob: RipplesFrame::freq_knob_for_cutoff(500.0),
//!     input: 1.0,
//!     ..Default::default()
//! };
//! for _ in 0..64 {
//!     bank.process(0, &mut frame);
//! }
//! assert!(frame.lp4.is_finite());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod ripples;
pub mod shelves;
pub mod streams;

// Re-export main types at crate root
pub use ripples::{RIPPLES_SATURATION, RipplesEngine, RipplesFrame};
pub use shelves::{SHELVES_SATURATION, ShelvesBand, ShelvesEngine, ShelvesFrame};
pub use streams::{
    ChannelLights, DIGITAL_BLOCK_SIZE, DIGITAL_SAMPLE_RATE, DigitalControls, DigitalSection,
    ManualVca,
    STREAMS_SATURATION, StreamsAnalogChannel, StreamsAnalogEngine, StreamsAnalogFrame,
    StreamsChannel, StreamsEngine, StreamsFrame,
};
