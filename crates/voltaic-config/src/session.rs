//! Render session file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// One offline render: which engine, how it is set up, and what drives it.
///
/// # TOML Format
///
/// ```toml
/// sample_rate = 48000
/// channels = 1
/// duration_secs = 2.0
///
/// [engine]
/// kind = "ripples"
/// res = 0.6
/// freq = 0.55
/// fm = 0.0
///
/// [signal]
/// waveform = "saw"
/// frequency = 110.0
/// amplitude = 5.0
/// ```
///
/// Omitted fields take their defaults. A CV field that is left out leaves
/// that jack unpatched, so it reads its normal voltage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Host sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Engine channels in the bank, 1 to 16. Channel `n` plays the signal
    /// `n` semitones up.
    #[serde(default = "default_channels")]
    pub channels: usize,

    /// Render length in seconds.
    #[serde(default = "default_duration")]
    pub duration_secs: f32,

    /// Engine and its knob settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Test signal fed to every channel.
    #[serde(default)]
    pub signal: SignalConfig,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_channels() -> usize {
    1
}

fn default_duration() -> f32 {
    1.0
}

fn default_half() -> f32 {
    0.5
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            duration_secs: default_duration(),
            engine: EngineConfig::default(),
            signal: SignalConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Load a session from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse a session from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the session to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the session to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Total frames the render produces.
    pub fn frame_count(&self) -> usize {
        (self.duration_secs.max(0.0) * self.sample_rate as f32) as usize
    }
}

/// Engine selection and settings, tagged by `kind`.
///
/// Knobs use the engine's normalized ranges: 0 to 1, or −1 to 1 for
/// attenuverters and gains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineConfig {
    /// Ripples ladder filter.
    Ripples {
        /// Resonance knob, 0 to 1.
        #[serde(default)]
        res: f32,
        /// Frequency knob, 0 to 1.
        #[serde(default = "default_half")]
        freq: f32,
        /// FM attenuverter, −1 to 1. The test signal is also patched to FM.
        #[serde(default)]
        fm: f32,
        /// Gain CV in volts; unpatched when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gain_cv: Option<f32>,
    },

    /// Shelves equalizer.
    Shelves {
        /// Low shelf band.
        #[serde(default)]
        low_shelf: BandConfig,
        /// First parametric band.
        #[serde(default)]
        p1: BandConfig,
        /// Second parametric band.
        #[serde(default)]
        p2: BandConfig,
        /// High shelf band.
        #[serde(default)]
        high_shelf: BandConfig,
        /// −6 dB input pad.
        #[serde(default)]
        pre_gain: bool,
    },

    /// Streams with the manual VCA digital section.
    Streams {
        /// LEVEL MOD knob, 0 to 1.
        #[serde(default = "default_half")]
        level_mod: f32,
        /// RESPONSE knob, 0 to 1.
        #[serde(default = "default_half")]
        response: f32,
        /// LEVEL CV in volts; unpatched (8 V normal) when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level_cv: Option<f32>,
    },
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::Ripples {
            res: 0.0,
            freq: default_half(),
            fm: 0.0,
            gain_cv: None,
        }
    }
}

impl EngineConfig {
    /// Default settings for an engine by name.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "ripples" => Some(Self::default()),
            "shelves" => Some(EngineConfig::Shelves {
                low_shelf: BandConfig::default(),
                p1: BandConfig::default(),
                p2: BandConfig::default(),
                high_shelf: BandConfig::default(),
                pre_gain: false,
            }),
            "streams" => Some(EngineConfig::Streams {
                level_mod: default_half(),
                response: default_half(),
                level_cv: None,
            }),
            _ => None,
        }
    }

    /// Engine name as written in session files.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineConfig::Ripples { .. } => "ripples",
            EngineConfig::Shelves { .. } => "shelves",
            EngineConfig::Streams { .. } => "streams",
        }
    }
}

/// Knob settings for one Shelves band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandConfig {
    /// Frequency knob, 0 to 1.
    #[serde(default = "default_half")]
    pub freq: f32,
    /// Gain knob, −1 to 1.
    #[serde(default)]
    pub gain: f32,
    /// Q knob, 0 to 1. Ignored by the shelving bands.
    #[serde(default)]
    pub q: f32,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            freq: default_half(),
            gain: 0.0,
            q: 0.0,
        }
    }
}

/// Test signal shape.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Naive rising sawtooth.
    Saw,
    /// Naive square wave.
    Square,
    /// Uniform white noise.
    Noise,
    /// 0 V.
    Silence,
}

/// Test signal fed into the engine's audio input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SignalConfig {
    /// Shape.
    #[serde(default)]
    pub waveform: Waveform,
    /// Frequency in Hz. Unused by noise and silence.
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    /// Peak voltage.
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
}

fn default_frequency() -> f32 {
    220.0
}

fn default_amplitude() -> f32 {
    5.0
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            waveform: Waveform::default(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
        }
    }
}
