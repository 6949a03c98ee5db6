//! Anti-aliasing filter bank for oversampled circuit models.
//!
//! Every nonlinear engine runs its core at an integer multiple of the host
//! rate. The host rate is first snapped to one of fifteen [`SupportedRate`]s;
//! each (profile, role, rate) triple selects a precomputed elliptic cascade
//! and an oversampling factor.
//!
//! # Profiles
//!
//! | Profile | Minimum core rate | Up/down cascades |
//! |---------|-------------------|------------------|
//! | [`AaProfile::Ladder`] | 120 kHz | shared |
//! | [`AaProfile::Equalizer`] | 120 kHz | separate |
//! | [`AaProfile::Dynamics`] | 80 kHz | separate |
//!
//! Designs are 0.1 dB passband ripple, 100 dB stopband elliptic filters with
//! DC gain compensated for even orders. Upsampling cascades place the
//! stopband at `(fs·factor − critical_bw) / 3`, downsampling cascades at
//! `fs − critical_bw`, where `critical_bw` is 20 kHz (Ladder, Equalizer) or
//! 40 kHz (Dynamics) capped at Nyquist.
//!
//! # Rate selection
//!
//! Thresholds are scanned from the highest down and the first threshold at
//! or below the requested rate wins. Anything below 8 kHz (or NaN) uses the
//! 8 kHz design. Designs are never interpolated.
//!
//! ```rust
//! use voltaic_core::aafilter::SupportedRate;
//!
//! assert_eq!(SupportedRate::from_hz(48_000.0), SupportedRate::Hz48000);
//! assert_eq!(SupportedRate::from_hz(50_000.0), SupportedRate::Hz48000);
//! assert_eq!(SupportedRate::from_hz(47_999.0), SupportedRate::Hz44100);
//! assert_eq!(SupportedRate::from_hz(1_000.0), SupportedRate::Hz8000);
//! ```

mod tables;

use crate::lanes::Sample;
use crate::sos::{SosCoefficients, SosFilter};

/// Longest cascade in any table.
pub const MAX_SECTIONS: usize = 8;

/// Host sample rates with a dedicated filter design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SupportedRate {
    /// 8 kHz
    Hz8000,
    /// 11.025 kHz
    Hz11025,
    /// 12 kHz
    Hz12000,
    /// 22.05 kHz
    Hz22050,
    /// 24 kHz
    Hz24000,
    /// 44.1 kHz
    Hz44100,
    /// 48 kHz
    Hz48000,
    /// 88.2 kHz
    Hz88200,
    /// 96 kHz
    Hz96000,
    /// 176.4 kHz
    Hz176400,
    /// 192 kHz
    Hz192000,
    /// 352.8 kHz
    Hz352800,
    /// 384 kHz
    Hz384000,
    /// 705.6 kHz
    Hz705600,
    /// 768 kHz
    Hz768000,
}

impl SupportedRate {
    /// Number of supported rates.
    pub const COUNT: usize = 15;

    /// All rates in ascending order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hz8000,
        Self::Hz11025,
        Self::Hz12000,
        Self::Hz22050,
        Self::Hz24000,
        Self::Hz44100,
        Self::Hz48000,
        Self::Hz88200,
        Self::Hz96000,
        Self::Hz176400,
        Self::Hz192000,
        Self::Hz352800,
        Self::Hz384000,
        Self::Hz705600,
        Self::Hz768000,
    ];

    /// Rate in Hz.
    pub const fn hz(self) -> u32 {
        match self {
            Self::Hz8000 => 8_000,
            Self::Hz11025 => 11_025,
            Self::Hz12000 => 12_000,
            Self::Hz22050 => 22_050,
            Self::Hz24000 => 24_000,
            Self::Hz44100 => 44_100,
            Self::Hz48000 => 48_000,
            Self::Hz88200 => 88_200,
            Self::Hz96000 => 96_000,
            Self::Hz176400 => 176_400,
            Self::Hz192000 => 192_000,
            Self::Hz352800 => 352_800,
            Self::Hz384000 => 384_000,
            Self::Hz705600 => 705_600,
            Self::Hz768000 => 768_000,
        }
    }

    /// Position in [`SupportedRate::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snap a host rate to a design rate.
    ///
    /// Returns the highest supported rate that does not exceed
    /// `sample_rate`, or [`SupportedRate::Hz8000`] when none does.
    pub fn from_hz(sample_rate: f32) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|rate| rate.hz() as f32 <= sample_rate)
            .unwrap_or(Self::Hz8000)
    }
}

/// Host rate an engine can be configured for.
///
/// Non-finite and non-positive rates become the lowest supported rate so
/// that time steps and rate ratios stay finite and positive. Every other
/// rate passes through unchanged.
pub fn usable_sample_rate(sample_rate: f32) -> f32 {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        sample_rate
    } else {
        SupportedRate::Hz8000.hz() as f32
    }
}

/// Family of filter designs, one per engine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AaProfile {
    /// Ladder filter: ≥120 kHz core, one shared cascade.
    Ladder,
    /// Four-band equalizer: ≥120 kHz core.
    Equalizer,
    /// VCA/low-pass gate: ≥80 kHz core.
    Dynamics,
}

/// Which side of the oversampled core a filter sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterRole {
    /// Interpolation filter after zero-stuffing.
    Upsampling,
    /// Decimation filter before dropping samples.
    Downsampling,
}

/// One precomputed design: oversampling factor plus its cascade.
#[derive(Debug, Clone, Copy)]
pub struct AaDesign {
    /// Core rate divided by host rate.
    pub oversampling_factor: usize,
    /// Normalized biquad sections, first section first.
    pub sections: &'static [SosCoefficients],
}

/// Look up the design for a profile, role and rate.
pub fn design(profile: AaProfile, role: FilterRole, rate: SupportedRate) -> &'static AaDesign {
    let table = match (profile, role) {
        (AaProfile::Ladder, _) => &tables::LADDER,
        (AaProfile::Equalizer, FilterRole::Upsampling) => &tables::EQUALIZER_UP,
        (AaProfile::Equalizer, FilterRole::Downsampling) => &tables::EQUALIZER_DOWN,
        (AaProfile::Dynamics, FilterRole::Upsampling) => &tables::DYNAMICS_UP,
        (AaProfile::Dynamics, FilterRole::Downsampling) => &tables::DYNAMICS_DOWN,
    };
    &table[rate.index()]
}

/// Oversampling factor a profile uses at a given host rate.
pub fn oversampling_factor(profile: AaProfile, sample_rate: f32) -> usize {
    design(profile, FilterRole::Upsampling, SupportedRate::from_hz(sample_rate)).oversampling_factor
}

/// Anti-aliasing filter for one side of an oversampled core.
///
/// Reconfigured only by [`AaFilter::init`]; [`AaFilter::process`] runs the
/// loaded cascade at the oversampled rate.
#[derive(Debug, Clone)]
pub struct AaFilter<T: Sample> {
    profile: AaProfile,
    role: FilterRole,
    rate: SupportedRate,
    factor: usize,
    filter: SosFilter<T, MAX_SECTIONS>,
}

impl<T: Sample> AaFilter<T> {
    /// Create a filter loaded with the 48 kHz design.
    pub fn new(profile: AaProfile, role: FilterRole) -> Self {
        let mut aa = Self {
            profile,
            role,
            rate: SupportedRate::Hz48000,
            factor: 1,
            filter: SosFilter::new(),
        };
        aa.load(SupportedRate::Hz48000);
        aa
    }

    /// Select the design for `sample_rate` and clear the filter state.
    ///
    /// # Returns
    /// The oversampling factor for the selected design.
    pub fn init(&mut self, sample_rate: f32) -> usize {
        let rate = SupportedRate::from_hz(sample_rate);
        self.load(rate);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "aafilter_init: {:?}/{:?} {} Hz -> {} Hz design, {}x, {} sections",
            self.profile,
            self.role,
            sample_rate,
            rate.hz(),
            self.factor,
            self.filter.num_sections()
        );
        self.factor
    }

    fn load(&mut self, rate: SupportedRate) {
        let d = design(self.profile, self.role, rate);
        self.rate = rate;
        self.factor = d.oversampling_factor;
        self.filter.init(d.sections);
    }

    /// Filter one oversampled sample.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        self.filter.process(input)
    }

    /// Clear the filter state, keeping the design.
    pub fn reset(&mut self) {
        self.filter.reset();
    }

    /// Oversampling factor of the loaded design.
    pub fn oversampling_factor(&self) -> usize {
        self.factor
    }

    /// Design rate the host rate was snapped to.
    pub fn rate(&self) -> SupportedRate {
        self.rate
    }

    /// Number of biquad sections in the loaded design.
    pub fn num_sections(&self) -> usize {
        self.filter.num_sections()
    }
}

/// Matched interpolation and decimation filters for one engine.
#[derive(Debug, Clone)]
pub struct AaFilterPair<T: Sample> {
    up: AaFilter<T>,
    down: AaFilter<T>,
}

impl<T: Sample> AaFilterPair<T> {
    /// Create a pair loaded with the 48 kHz designs.
    pub fn new(profile: AaProfile) -> Self {
        Self {
            up: AaFilter::new(profile, FilterRole::Upsampling),
            down: AaFilter::new(profile, FilterRole::Downsampling),
        }
    }

    /// Configure both filters for `sample_rate`; returns the oversampling factor.
    pub fn init(&mut self, sample_rate: f32) -> usize {
        self.down.init(sample_rate);
        self.up.init(sample_rate)
    }

    /// Interpolation filter.
    #[inline]
    pub fn process_up(&mut self, input: T) -> T {
        self.up.process(input)
    }

    /// Decimation filter.
    #[inline]
    pub fn process_down(&mut self, input: T) -> T {
        self.down.process(input)
    }

    /// Oversampling factor of the loaded designs.
    pub fn oversampling_factor(&self) -> usize {
        self.up.oversampling_factor()
    }

    /// Clear both filters.
    pub fn reset(&mut self) {
        self.up.reset();
        self.down.reset();
    }
}
