//! Four-band shelving/parametric equalizer built from VCA filter cores.
//!
//! Band lanes, in [`F32x4`] order: low shelf, parametric 1, parametric 2,
//! high shelf.
//!
//! The shelves are one-pole [`LowpassCell`]s (lane 0 gives the low shelf,
//! lane 3 the high shelf by subtraction); the parametrics are [`SvfCell`]s
//! whose damping VCA sets Q. Each band's VCA gain mixes the filtered signal
//! against the dry path, so the sum is flat when every gain knob is centered.
//!
//! Frequency, Q and gain control voltages are converted to VCA levels once
//! per host sample when none of their jacks is patched. Patched controls are
//! held for the host sample, smoothed by the upsampling filters alongside the
//! zero-stuffed audio, and converted on every sub-step.

use core::f32::consts::PI;

use voltaic_core::{
    AaFilter, AaProfile, Engine, F32x4, FilterRole, LowpassCell, RcFilter, Sample, SlewLimiter,
    SvfCell, db_to_linear, exp_vca_level, finite_or_zero, q_factor_to_voltage, rescale,
    usable_sample_rate,
};

// Knob ranges
const FREQ_KNOB_MAX: f32 = 20e3;
const FREQ_KNOB_VOLTAGE: f32 = 9.965_784; // log2(1000)
const GAIN_KNOB_RANGE_DB: f32 = 18.0;
const Q_KNOB_MIN: f32 = 0.5;
const Q_KNOB_MAX: f32 = 40.0;

/// Op-amp rail, volts.
pub const SHELVES_SATURATION: f32 = 10.5;

// Filter core
const FILTER_RC: f32 = 1.0 / (2.0 * PI * FREQ_KNOB_MAX);

// Frequency CV amplifier
const FREQ_AMP_R: f32 = 18e3;
const FREQ_AMP_C: f32 = 560e-12;
const MIN_V_OCT: f32 = -SHELVES_SATURATION * 100e3 / FREQ_AMP_R;

// Q CV amplifier
const Q_AMP_R: f32 = 22e3;
const Q_AMP_C: f32 = 560e-12;
const Q_AMP_GAIN: f32 = -Q_AMP_R / 150e3;

// Gain CV amplifier
const GAIN_DB_PER_VOLT: f32 = 3.010_3;
const MAX_GAIN_DB: f32 = 24.0;

// Clip indicator
const CLIP_THRESHOLD: f32 = 7.86;
const CLIP_INPUT_R: f32 = 150e3;
const CLIP_INPUT_C: f32 = 100e-9;
const CLIP_RISE_TIME: f32 = 2e-3;
const CLIP_FALL_TIME: f32 = 10e-3;

/// Knobs and CV jacks of one band.
///
/// The shelving bands ignore the Q fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelvesBand {
    /// Frequency, 0 to 1 (20 Hz to 20 kHz, exponential).
    pub freq_knob: f32,
    /// Gain, −1 to 1 (±18 dB).
    pub gain_knob: f32,
    /// Quality, 0 to 1 (Q 0.5 to 40).
    pub q_knob: f32,
    /// 1 V/oct frequency CV.
    pub freq_cv: f32,
    /// Gain CV, about 3 dB per volt.
    pub gain_cv: f32,
    /// Q CV.
    pub q_cv: f32,
    /// Frequency jack patched.
    pub freq_cv_connected: bool,
    /// Gain jack patched.
    pub gain_cv_connected: bool,
    /// Q jack patched.
    pub q_cv_connected: bool,
}

impl Default for ShelvesBand {
    fn default() -> Self {
        Self {
            freq_knob: 0.5,
            gain_knob: 0.0,
            q_knob: 0.0,
            freq_cv: 0.0,
            gain_cv: 0.0,
            q_cv: 0.0,
            freq_cv_connected: false,
            gain_cv_connected: false,
            q_cv_connected: false,
        }
    }
}

/// One tick of Shelves controls, jacks and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShelvesFrame {
    /// Low shelf band.
    pub low_shelf: ShelvesBand,
    /// First parametric band.
    pub p1: ShelvesBand,
    /// Second parametric band.
    pub p2: ShelvesBand,
    /// High shelf band.
    pub high_shelf: ShelvesBand,

    /// Frequency CV added to every band.
    pub global_freq_cv: f32,
    /// Gain CV added to every band.
    pub global_gain_cv: f32,
    /// Global frequency jack patched.
    pub global_freq_cv_connected: bool,
    /// Global gain jack patched.
    pub global_gain_cv_connected: bool,
    /// Audio input.
    pub main_in: f32,
    /// −6 dB input pad.
    pub pre_gain: bool,

    /// Equalized output.
    pub main_out: f32,
    /// Parametric 1 highpass.
    pub p1_hp_out: f32,
    /// Parametric 1 bandpass.
    pub p1_bp_out: f32,
    /// Parametric 1 lowpass.
    pub p1_lp_out: f32,
    /// Parametric 2 highpass.
    pub p2_hp_out: f32,
    /// Parametric 2 bandpass.
    pub p2_bp_out: f32,
    /// Parametric 2 lowpass.
    pub p2_lp_out: f32,
    /// Parametric 2 highpass jack patched.
    pub p2_hp_out_connected: bool,
    /// Parametric 2 bandpass jack patched.
    pub p2_bp_out_connected: bool,
    /// Parametric 2 lowpass jack patched.
    pub p2_lp_out_connected: bool,

    /// Clip light, 0 to 1.
    pub clip: f32,
}

impl ShelvesFrame {
    fn bands(&self) -> [&ShelvesBand; 4] {
        [&self.low_shelf, &self.p1, &self.p2, &self.high_shelf]
    }

    fn lanes(&self, f: impl Fn(&ShelvesBand) -> f32) -> F32x4 {
        F32x4::from(self.bands().map(f))
    }

    fn p2_outputs_connected(&self) -> bool {
        self.p2_hp_out_connected || self.p2_bp_out_connected || self.p2_lp_out_connected
    }
}

/// VCA level of the frequency cells for a V/oct control.
#[inline]
fn freq_vca_level(v_oct: F32x4) -> F32x4 {
    v_oct.clamp(MIN_V_OCT, 0.0).exp2()
}

/// VCA level of the damping path for a Q control voltage.
#[inline]
fn q_vca_level(q_cv: F32x4) -> F32x4 {
    q_cv.clamp(0.0, SHELVES_SATURATION).map(exp_vca_level)
}

/// VCA level of the band gain for a gain in dB.
#[inline]
fn gain_vca_level(gain_db: F32x4) -> F32x4 {
    gain_db.map(|db| db_to_linear(db.min(MAX_GAIN_DB)))
}

/// Shelves circuit model.
///
/// Runs the equalizer profile of the AA filter bank: three upsampling
/// filters (frequency, Q with the audio input in lane 0, gain) and two
/// downsampling filters (main output with parametric 1, parametric 2).
#[derive(Debug, Clone)]
pub struct ShelvesEngine {
    sample_rate: f32,
    sample_time: f32,
    oversampling: usize,
    freq_up: AaFilter<F32x4>,
    q_up: AaFilter<F32x4>,
    gain_up: AaFilter<F32x4>,
    main_down: AaFilter<F32x4>,
    p2_down: AaFilter<F32x4>,
    shelves: LowpassCell<F32x4>,
    parametrics: SvfCell<F32x4>,
    freq_lpf: RcFilter<F32x4>,
    q_lpf: RcFilter<F32x4>,
    clip_hpf: RcFilter<f32>,
    clip_slew: SlewLimiter,
    q_knob_min_v: f32,
    q_knob_max_v: f32,
}

impl Default for ShelvesEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl ShelvesEngine {
    /// Create an engine configured for `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        let up = || AaFilter::new(AaProfile::Equalizer, FilterRole::Upsampling);
        let down = || AaFilter::new(AaProfile::Equalizer, FilterRole::Downsampling);
        let mut engine = Self {
            sample_rate,
            sample_time: 1.0 / sample_rate,
            oversampling: 1,
            freq_up: up(),
            q_up: up(),
            gain_up: up(),
            main_down: down(),
            p2_down: down(),
            shelves: LowpassCell::new(FILTER_RC, SHELVES_SATURATION),
            parametrics: SvfCell::new(FILTER_RC, SHELVES_SATURATION),
            freq_lpf: RcFilter::new(),
            q_lpf: RcFilter::new(),
            clip_hpf: RcFilter::new(),
            clip_slew: SlewLimiter::new(1.0 / CLIP_RISE_TIME, 1.0 / CLIP_FALL_TIME),
            q_knob_min_v: q_factor_to_voltage(Q_KNOB_MIN) / Q_AMP_GAIN,
            q_knob_max_v: q_factor_to_voltage(Q_KNOB_MAX) / Q_AMP_GAIN,
        };
        engine.set_sample_rate(sample_rate);
        engine
    }

    /// Oversampling factor at the configured rate.
    pub fn oversampling_factor(&self) -> usize {
        self.oversampling
    }
}

impl Engine for ShelvesEngine {
    type Frame = ShelvesFrame;

    fn process(&mut self, frame: &mut ShelvesFrame) {
        let bands = frame.bands();
        let f_cv_exists = frame.global_freq_cv_connected
            || bands.iter().any(|b| b.freq_cv_connected);
        let gain_cv_exists = frame.global_gain_cv_connected
            || bands.iter().any(|b| b.gain_cv_connected);
        let q_cv_exists = frame.p1.q_cv_connected || frame.p2.q_cv_connected;

        let f_knob = frame.lanes(|b| b.freq_knob);
        let f_cv = frame.lanes(|b| finite_or_zero(b.freq_cv)) + finite_or_zero(frame.global_freq_cv);
        let gain_knob = frame.lanes(|b| b.gain_knob);
        let gain_cv =
            frame.lanes(|b| finite_or_zero(b.gain_cv)) + finite_or_zero(frame.global_gain_cv);
        // Shelving bands have no Q control.
        let q_knob = F32x4::new(0.0, frame.p1.q_knob, frame.p2.q_knob, 0.0);
        let q_cv = F32x4::new(0.0, finite_or_zero(frame.p1.q_cv), finite_or_zero(frame.p2.q_cv), 0.0);

        self.freq_lpf.process(f_cv + (f_knob - 1.0) * FREQ_KNOB_VOLTAGE);
        let mut v_oct = self.freq_lpf.lowpass();

        let (q_min, q_max) = (self.q_knob_min_v, self.q_knob_max_v);
        self.q_lpf
            .process((q_cv - q_knob.map(|k| rescale(k, 0.0, 1.0, q_min, q_max))) * -Q_AMP_GAIN);
        let mut q_cv = self.q_lpf.lowpass();

        let mut gain_db = gain_knob * GAIN_KNOB_RANGE_DB + gain_cv * GAIN_DB_PER_VOLT;

        // The audio input travels through the Q upsampler in lane 0.
        let pad = if frame.pre_gain { 0.25 } else { 0.5 };
        q_cv[0] = finite_or_zero(frame.main_in) * pad;

        let mut f_level = freq_vca_level(v_oct);
        let mut q_level = q_vca_level(q_cv);
        let mut gain_level = gain_vca_level(gain_db);

        let (v_oct_held, gain_db_held) = (v_oct, gain_db);
        let q_held = F32x4::new(0.0, q_cv[1], q_cv[2], q_cv[3]);

        let p2_connected = frame.p2_outputs_connected();
        let factor = self.oversampling;
        let scale = factor as f32;
        let timestep = self.sample_time / scale;
        let mut out1 = F32x4::ZERO;
        let mut out2 = F32x4::ZERO;

        let audio = F32x4::new(q_cv[0] * scale, 0.0, 0.0, 0.0);

        for i in 0..factor {
            if f_cv_exists {
                v_oct = self.freq_up.process(v_oct_held);
                f_level = freq_vca_level(v_oct);
            }

            q_cv = self.q_up.process(if i == 0 { q_held + audio } else { q_held });
            if q_cv_exists {
                q_level = q_vca_level(q_cv);
            }

            if gain_cv_exists {
                gain_db = self.gain_up.process(gain_db_held);
                gain_level = gain_vca_level(gain_db);
            }

            let input = F32x4::splat(q_cv[0]);

            let shelf = self.shelves.process(timestep, input, f_level);
            let mid = self.parametrics.process(timestep, input, f_level, q_level)
                * (F32x4::splat(1.0) - gain_level);
            let low = shelf[0] * (1.0 - gain_level[0]);
            let high = -shelf[3] + (shelf[3] + input[0]) * gain_level[3];
            let sum = 2.0 * (low + mid[1] + mid[2] + high);

            let (lp, bp, hp) = (self.parametrics.lp(), self.parametrics.bp(), self.parametrics.hp());
            out1 = self.main_down.process(
                F32x4::new(sum, lp[1], bp[1], hp[1]).saturate(SHELVES_SATURATION),
            );
            if p2_connected {
                out2 = self.p2_down.process(
                    F32x4::new(0.0, lp[2], bp[2], hp[2]).saturate(SHELVES_SATURATION),
                );
            }
        }

        let out1 = out1.saturate(SHELVES_SATURATION);
        frame.main_out = out1[0];
        frame.p1_lp_out = out1[1];
        frame.p1_bp_out = out1[2];
        frame.p1_hp_out = out1[3];

        let out2 = out2.saturate(SHELVES_SATURATION);
        frame.p2_lp_out = out2[1];
        frame.p2_bp_out = out2[2];
        frame.p2_hp_out = out2[3];

        self.clip_hpf.process(out1[0]);
        let over = if self.clip_hpf.highpass().abs() > CLIP_THRESHOLD {
            1.0
        } else {
            0.0
        };
        frame.clip = self.clip_slew.process(over, self.sample_time);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        let sample_rate = usable_sample_rate(sample_rate);
        self.sample_rate = sample_rate;
        self.sample_time = 1.0 / sample_rate;

        self.oversampling = self.freq_up.init(sample_rate);
        self.q_up.init(sample_rate);
        self.gain_up.init(sample_rate);
        self.main_down.init(sample_rate);
        self.p2_down.init(sample_rate);

        // Control amplifiers and the clip detector run at the host rate.
        let freq_cut = 1.0 / (2.0 * PI * FREQ_AMP_R * FREQ_AMP_C);
        self.freq_lpf.set_cutoff_freq(F32x4::splat(freq_cut / sample_rate));
        let q_cut = 1.0 / (2.0 * PI * Q_AMP_R * Q_AMP_C);
        self.q_lpf.set_cutoff_freq(F32x4::splat(q_cut / sample_rate));
        let clip_cut = 1.0 / (2.0 * PI * CLIP_INPUT_R * CLIP_INPUT_C);
        self.clip_hpf.set_cutoff_freq(clip_cut / sample_rate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "shelves_init: {} Hz, {}x oversampling",
            sample_rate,
            self.oversampling
        );

        self.reset();
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn reset(&mut self) {
        self.freq_up.reset();
        self.q_up.reset();
        self.gain_up.reset();
        self.main_down.reset();
        self.p2_down.reset();
        self.shelves.reset();
        self.parametrics.reset();
        self.freq_lpf.reset();
        self.q_lpf.reset();
        self.clip_hpf.reset();
        self.clip_slew.reset();
    }

    fn outputs_finite(&self, frame: &ShelvesFrame) -> bool {
        [
            frame.main_out,
            frame.p1_hp_out,
            frame.p1_bp_out,
            frame.p1_lp_out,
            frame.p2_hp_out,
            frame.p2_bp_out,
            frame.p2_lp_out,
            frame.clip,
        ]
        .iter()
        .all(|x| x.is_finite())
    }

    fn silence_outputs(&self, frame: &mut ShelvesFrame) {
        frame.main_out = 0.0;
        frame.p1_hp_out = 0.0;
        frame.p1_bp_out = 0.0;
        frame.p1_lp_out = 0.0;
        frame.p2_hp_out = 0.0;
        frame.p2_bp_out = 0.0;
        frame.p2_lp_out = 0.0;
        frame.clip = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_rms(engine: &mut ShelvesEngine, frame: &mut ShelvesFrame, freq: f32) -> f32 {
        let sr = engine.sample_rate();
        let n = (sr / 2.0) as usize;
        let mut sum = 0.0;
        let mut count = 0;
        for i in 0..n {
            frame.main_in = libm::sinf(2.0 * PI * freq * i as f32 / sr);
            engine.process(frame);
            if i >= n / 2 {
                sum += frame.main_out * frame.main_out;
                count += 1;
            }
        }
        libm::sqrtf(sum / count as f32)
    }

    fn gain_db(engine: &mut ShelvesEngine, frame: &mut ShelvesFrame, freq: f32) -> f32 {
        20.0 * libm::log10f(sine_rms(engine, frame, freq) / core::f32::consts::FRAC_1_SQRT_2)
    }

    #[test]
    fn q_knob_spans_half_to_forty() {
        let engine = ShelvesEngine::default();
        assert!(engine.q_knob_min_v.abs() < 1e-6);
        assert!((engine.q_knob_max_v + 8.5639).abs() < 1e-3, "{}", engine.q_knob_max_v);
        // Full knob through the Q amplifier lands on the VCA voltage for Q = 40.
        let v = -engine.q_knob_max_v * -Q_AMP_GAIN;
        let level = q_vca_level(F32x4::splat(v))[0];
        assert!((level - 1.0 / (2.0 * Q_KNOB_MAX)).abs() < 1e-4, "{level}");
    }

    #[test]
    fn flat_when_gains_are_centered() {
        for freq in [100.0, 1_000.0, 5_000.0] {
            let mut engine = ShelvesEngine::new(48_000.0);
            let mut frame = ShelvesFrame::default();
            let g = gain_db(&mut engine, &mut frame, freq);
            assert!(g.abs() < 0.5, "{freq} Hz: {g:.2} dB");
        }
    }

    #[test]
    fn pre_gain_pads_six_db() {
        let mut engine = ShelvesEngine::new(48_000.0);
        let mut frame = ShelvesFrame {
            pre_gain: true,
            ..Default::default()
        };
        let g = gain_db(&mut engine, &mut frame, 1_000.0);
        assert!((g + 6.02).abs() < 0.5, "{g:.2} dB");
    }

    #[test]
    fn low_shelf_boosts_bass_only() {
        let mut frame = ShelvesFrame::default();
        frame.low_shelf.freq_knob = 0.3;
        frame.low_shelf.gain_knob = 1.0;

        let mut engine = ShelvesEngine::new(48_000.0);
        let bass = gain_db(&mut engine, &mut frame, 50.0);
        let mut engine = ShelvesEngine::new(48_000.0);
        let treble = gain_db(&mut engine, &mut frame, 10_000.0);
        assert!((bass - 18.0).abs() < 1.5, "bass {bass:.2} dB");
        assert!(treble.abs() < 1.0, "treble {treble:.2} dB");
    }

    #[test]
    fn parametric_cut_notches_center() {
        let mut frame = ShelvesFrame::default();
        frame.p1.gain_knob = -1.0;
        frame.p1.q_knob = 0.5;

        let mut engine = ShelvesEngine::new(48_000.0);
        let center_hz = 20_000.0 * libm::exp2f(-0.5 * FREQ_KNOB_VOLTAGE);
        let center = gain_db(&mut engine, &mut frame, center_hz);
        assert!(center < -10.0, "center {center:.2} dB");
    }

    #[test]
    fn p2_outputs_follow_connection() {
        let mut engine = ShelvesEngine::new(48_000.0);
        let mut frame = ShelvesFrame::default();
        sine_rms(&mut engine, &mut frame, 632.0);
        assert_eq!(frame.p2_bp_out, 0.0);

        frame.p2_bp_out_connected = true;
        let mut peak = 0.0_f32;
        for i in 0..4_800 {
            frame.main_in = libm::sinf(2.0 * PI * 632.0 * i as f32 / 48_000.0);
            engine.process(&mut frame);
            peak = peak.max(frame.p2_bp_out.abs());
        }
        assert!(peak > 0.1, "p2 bandpass peak {peak}");
    }

    #[test]
    fn clip_light_tracks_hot_signal() {
        let mut engine = ShelvesEngine::new(48_000.0);
        let mut frame = ShelvesFrame::default();
        for band in [&mut frame.low_shelf, &mut frame.p1, &mut frame.p2, &mut frame.high_shelf] {
            band.gain_knob = 1.0;
        }
        for i in 0..4_800 {
            frame.main_in = 8.0 * libm::sinf(2.0 * PI * 500.0 * i as f32 / 48_000.0);
            engine.process(&mut frame);
        }
        assert!(frame.clip > 0.5, "clip {}", frame.clip);
        assert!(frame.clip <= 1.0);

        frame.main_in = 0.0;
        for _ in 0..48_000 {
            engine.process(&mut frame);
        }
        assert!(frame.clip < 1e-6, "clip {}", frame.clip);
    }

    #[test]
    fn non_finite_knob_is_detected() {
        let mut engine = ShelvesEngine::new(48_000.0);
        let mut frame = ShelvesFrame::default();
        frame.p1.freq_knob = f32::NAN;
        frame.main_in = 1.0;
        engine.process(&mut frame);
        assert!(!engine.outputs_finite(&frame));
    }

    #[test]
    fn patched_cv_paths_match_unpatched_at_rest() {
        // Includes rates whose interpolation passband covers the host Nyquist.
        for rate in [8_000.0, 11_025.0, 96_000.0] {
            let mut quiet = ShelvesEngine::new(rate);
            let mut patched = ShelvesEngine::new(rate);
            let mut a = ShelvesFrame::default();
            a.p1.gain_knob = 0.5;
            let mut b = a;
            b.global_freq_cv_connected = true;
            b.global_gain_cv_connected = true;
            b.p1.q_cv_connected = true;
            let ga = gain_db(&mut quiet, &mut a, 632.0);
            let gb = gain_db(&mut patched, &mut b, 632.0);
            assert!((ga - gb).abs() < 0.1, "{rate} Hz: {ga:.3} vs {gb:.3}");
        }
    }

    #[test]
    fn reconfiguring_twice_matches_once() {
        let mut once = ShelvesEngine::new(44_100.0);
        let mut twice = ShelvesEngine::new(192_000.0);
        twice.set_sample_rate(44_100.0);
        twice.set_sample_rate(44_100.0);

        let mut a = ShelvesFrame::default();
        a.p1.gain_knob = 0.8;
        a.high_shelf.gain_knob = -0.4;
        a.p2_lp_out_connected = true;
        let mut b = a;
        for i in 0..2_048 {
            let x = 3.0 * libm::sinf(2.0 * PI * 440.0 * i as f32 / 44_100.0);
            a.main_in = x;
            b.main_in = x;
            once.process(&mut a);
            twice.process(&mut b);
            assert_eq!(a, b, "tick {i}");
        }
    }

    #[test]
    fn non_positive_rate_uses_lowest_table() {
        let mut engine = ShelvesEngine::new(0.0);
        assert_eq!(engine.sample_rate(), 8_000.0);
        assert_eq!(engine.oversampling_factor(), 15);
        let mut frame = ShelvesFrame {
            main_in: 1.0,
            ..Default::default()
        };
        for _ in 0..800 {
            engine.process(&mut frame);
        }
        assert!(engine.outputs_finite(&frame));
        assert!((frame.main_out - 1.0).abs() < 0.05, "{}", frame.main_out);
    }

    #[test]
    fn poisoned_state_persists_until_the_bank_rebuilds() {
        let mut frame = ShelvesFrame {
            main_in: 1.0,
            ..Default::default()
        };

        // One bad tick leaves NaN in the integrators for good.
        let mut engine = ShelvesEngine::new(48_000.0);
        frame.p1.freq_knob = f32::NAN;
        engine.process(&mut frame);
        frame.p1.freq_knob = 0.5;
        for _ in 0..16 {
            engine.process(&mut frame);
            assert!(!engine.outputs_finite(&frame));
        }

        let mut bank: voltaic_core::EngineBank<ShelvesEngine> =
            voltaic_core::EngineBank::new(48_000.0);
        frame.p1.freq_knob = f32::NAN;
        bank.process(0, &mut frame);
        frame.p1.freq_knob = 0.5;
        bank.process(0, &mut frame);
        assert_eq!(bank.recoveries(), 1);
        assert!(bank.engine(0).is_some_and(|e| e.outputs_finite(&frame)));
        assert!(frame.main_out.is_finite());
    }
}
