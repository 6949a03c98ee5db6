//! Four-pole OTA ladder filter with resonance and an output VCA.
//!
//! The filter core is four VCA-integrator cells in series. Each cell is an
//! exponential VCA feeding an op-amp integrator whose input is a virtual
//! ground, which gives
//!
//! ```text
//! i_x     = (v_in + v_out) / R
//! A · i_x = −C · dv_out/dt
//! dv_out/dt = −A/(RC) · (v_in + v_out)
//! ```
//!
//! with `A = 2^v_oct`. A small self-modulation term `(1 + 0.01·(v_in + v_out))`
//! adds the even harmonics of the real cells. Resonance is an OTA that
//! compares the highpassed input (feedforward) against the last cell
//! (feedback) and injects its current into the first cell.
//!
//! Everything inside the loop runs at the oversampled rate chosen by the
//! ladder AA profile; the four control signals travel through the
//! anti-aliasing filters together as one [`F32x4`]. Only the audio lane is
//! zero-stuffed. The control lanes are held for the whole host sample, so
//! rate images never reach the exponential converter, even at host rates
//! whose Nyquist frequency lies inside the interpolation passband.

use core::f32::consts::PI;

use voltaic_core::{
    AaFilterPair, AaProfile, Engine, F32x4, RcFilter, Sample, V_TO_I_OPEN_BIAS_R, Xorshift32,
    finite_or_zero, ota_current, step_rk2, usable_sample_rate, v_to_i_converter,
};

// Frequency knob spans 20 Hz to 20 kHz.
const FREQ_KNOB_MAX: f32 = 20_000.0;
const FREQ_KNOB_VOLTAGE: f32 = 9.965_784; // log2(1000)

// Frequency CV amplifier: 2164 at -33 mV/dB, +6 dB per volt.
const FREQ_AMP_R: f32 = 0.033 * 6.020_6 * 100e3;
const FREQ_AMP_C: f32 = 560e-12;

// Resonance CV amplifier
const RES_INPUT_R: f32 = 22e3;
const RES_KNOB_V: f32 = 12.0;
const RES_KNOB_R: f32 = 62e3;
const RES_AMP_R: f32 = 47e3;
const RES_AMP_C: f32 = 560e-12;

// Gain CV amplifier
const GAIN_INPUT_R: f32 = 27e3;
const GAIN_NORMAL_V: f32 = 12.0;
const GAIN_NORMAL_R: f32 = 15e3;
const GAIN_AMP_R: f32 = 47e3;
const GAIN_AMP_C: f32 = 560e-12;

// Filter core
const FILTER_CELL_R: f32 = 33e3;
const FILTER_CELL_RC: f32 = 1.0 / (2.0 * PI * FREQ_KNOB_MAX);
const FILTER_INPUT_GAIN: f32 = FILTER_CELL_R / 100e3;
const FILTER_CELL_SELF_MODULATION: f32 = 0.01;

// Resonance feedback and feedforward dividers
const FEEDBACK_GAIN: f32 = 1e3 / (22e3 + 1e3);
const FEEDFORWARD_R: f32 = 300e3 + 1e3;
const FEEDFORWARD_GAIN: f32 = 1e3 / FEEDFORWARD_R;
const FEEDFORWARD_C: f32 = 220e-9;

// Output amplifiers
const LP2_GAIN: f32 = -100e3 / 39e3;
const LP4_GAIN: f32 = -100e3 / 33e3;
const BP2_GAIN: f32 = -100e3 / 39e3;

// Output VCA
const VCA_INPUT_C: f32 = 4.7e-6;
const VCA_INPUT_R: f32 = 100e3 + 1e3;
const VCA_INPUT_GAIN: f32 = 1e3 / VCA_INPUT_R;
const VCA_OUTPUT_R: f32 = 100e3;

/// Op-amp rail, volts.
pub const RIPPLES_SATURATION: f32 = 10.6;

// Peak-to-peak level of the dither that bootstraps self-oscillation.
const DITHER_LEVEL: f32 = 1e-6;

/// One tick of Ripples controls, jacks and outputs.
///
/// Knobs are normalized; CVs and audio are volts. Non-finite jack voltages
/// read as 0 V.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RipplesFrame {
    /// Resonance, 0 to 1.
    pub res_knob: f32,
    /// Cutoff, 0 to 1 (20 Hz to 20 kHz, exponential).
    pub freq_knob: f32,
    /// FM attenuverter, −1 to 1.
    pub fm_knob: f32,

    /// Resonance CV.
    pub res_cv: f32,
    /// 1 V/oct cutoff CV.
    pub freq_cv: f32,
    /// FM CV, scaled by `fm_knob`.
    pub fm_cv: f32,
    /// Audio input.
    pub input: f32,
    /// Output VCA CV.
    pub gain_cv: f32,
    /// False normals the gain jack to 12 V.
    pub gain_cv_connected: bool,

    /// Two-pole bandpass.
    pub bp2: f32,
    /// Two-pole lowpass.
    pub lp2: f32,
    /// Four-pole lowpass.
    pub lp4: f32,
    /// Four-pole lowpass through the output VCA.
    pub lp4vca: f32,
}

impl Default for RipplesFrame {
    fn default() -> Self {
        Self {
            res_knob: 0.0,
            freq_knob: 0.5,
            fm_knob: 0.0,
            res_cv: 0.0,
            freq_cv: 0.0,
            fm_cv: 0.0,
            input: 0.0,
            gain_cv: 0.0,
            gain_cv_connected: false,
            bp2: 0.0,
            lp2: 0.0,
            lp4: 0.0,
            lp4vca: 0.0,
        }
    }
}

impl RipplesFrame {
    /// Frequency knob position for a cutoff in Hz, with no CV applied.
    pub fn freq_knob_for_cutoff(cutoff_hz: f32) -> f32 {
        1.0 + libm::log2f(cutoff_hz / FREQ_KNOB_MAX) / FREQ_KNOB_VOLTAGE
    }
}

/// Ripples circuit model.
///
/// # Example
///
/// ```rust
/// use voltaic_core::Engine;
/// use voltaic_engines::{RipplesEngine, RipplesFrame};
///
/// let mut ripples = RipplesEngine::new(48_000.0);
/// let mut frame = RipplesFrame {
///     freq_knob: RipplesFrame::freq_knob_for_cutoff(1_000.0),
///     input: 1.0,
///     ..Default::default()
/// };
/// for _ in 0..4_800 {
///     ripples.process(&mut frame);
/// }
/// // Unity gain at DC, inverted by the output amplifier
/// assert!((frame.lp4 + 1.0).abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct RipplesEngine {
    sample_rate: f32,
    sample_time: f32,
    aa: AaFilterPair<F32x4>,
    /// Lanes: feedforward highpass, v/oct, resonance current, VCA current.
    rc_filters: RcFilter<F32x4>,
    vca_hpf: RcFilter<f32>,
    cells: F32x4,
    dither: Xorshift32,
}

impl Default for RipplesEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl RipplesEngine {
    /// Create an engine configured for `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        let mut engine = Self {
            sample_rate,
            sample_time: 1.0 / sample_rate,
            aa: AaFilterPair::new(AaProfile::Ladder),
            rc_filters: RcFilter::new(),
            vca_hpf: RcFilter::new(),
            cells: F32x4::ZERO,
            dither: Xorshift32::default(),
        };
        engine.set_sample_rate(sample_rate);
        engine
    }

    /// Oversampling factor at the configured rate.
    pub fn oversampling_factor(&self) -> usize {
        self.aa.oversampling_factor()
    }

    /// Filter cell voltages, first to last.
    pub fn cell_voltages(&self) -> [f32; 4] {
        self.cells.to_array()
    }

    /// One oversampled step of the ladder.
    ///
    /// `inputs` holds (input, v/oct, resonance current, VCA current); the
    /// result holds (bp2, lp2, lp4, lp4vca).
    fn core_process(&mut self, inputs: F32x4, timestep: f32) -> F32x4 {
        self.rc_filters.process(inputs);
        // Filter ripple can overshoot a control past its physical range.
        let control = self.rc_filters.lowpass();
        let v_oct = control[1].min(0.0);
        let i_reso = control[2].max(0.0);
        let i_vca = control[3].max(0.0);
        let feedforward = self.rc_filters.highpass()[0] * FEEDFORWARD_GAIN;

        let rad_per_s = -libm::exp2f(v_oct) / FILTER_CELL_RC;
        let drive = inputs[0] * FILTER_INPUT_GAIN;

        self.cells = step_rk2(timestep, self.cells, |v| {
            let res = FILTER_CELL_R * ota_current(feedforward, v[3] * FEEDBACK_GAIN, i_reso);
            // Each cell is driven by the one before it; the first by the input.
            let v_in = F32x4::new(drive + res, v[0], v[1], v[2]);
            let v_sum = v_in + v;
            v_sum * rad_per_s * (v_sum * FILTER_CELL_SELF_MODULATION + 1.0)
        })
        .saturate(RIPPLES_SATURATION);

        let [lp1, lp2, _, lp4] = self.cells.to_array();
        let bp2 = (lp1 + lp2) * BP2_GAIN;

        self.vca_hpf.process(lp4);
        let lp4vca =
            -VCA_OUTPUT_R * ota_current(0.0, self.vca_hpf.highpass() * VCA_INPUT_GAIN, i_vca);

        F32x4::new(bp2, lp2 * LP2_GAIN, lp4 * LP4_GAIN, lp4vca)
    }
}

impl Engine for RipplesEngine {
    type Frame = RipplesFrame;

    fn process(&mut self, frame: &mut RipplesFrame) {
        let v_oct = ((frame.freq_knob - 1.0) * FREQ_KNOB_VOLTAGE
            + finite_or_zero(frame.freq_cv)
            + finite_or_zero(frame.fm_cv) * frame.fm_knob)
            .min(0.0);

        let i_reso = v_to_i_converter(
            RES_AMP_R,
            finite_or_zero(frame.res_cv),
            RES_INPUT_R,
            frame.res_knob * RES_KNOB_V,
            RES_KNOB_R,
        );

        let i_vca = if frame.gain_cv_connected {
            v_to_i_converter(
                GAIN_AMP_R,
                finite_or_zero(frame.gain_cv),
                GAIN_INPUT_R,
                0.0,
                V_TO_I_OPEN_BIAS_R,
            )
        } else {
            v_to_i_converter(
                GAIN_AMP_R,
                GAIN_NORMAL_V,
                GAIN_INPUT_R + GAIN_NORMAL_R,
                0.0,
                V_TO_I_OPEN_BIAS_R,
            )
        };

        let factor = self.aa.oversampling_factor();
        let timestep = self.sample_time / factor as f32;
        let input = finite_or_zero(frame.input) + DITHER_LEVEL * (self.dither.uniform() - 0.5);
        let held = F32x4::new(0.0, v_oct, i_reso, i_vca);
        let stuffed = held + F32x4::new(input * factor as f32, 0.0, 0.0, 0.0);

        let mut outputs = F32x4::ZERO;
        for i in 0..factor {
            let up = self.aa.process_up(if i == 0 { stuffed } else { held });
            let core = self.core_process(up, timestep);
            outputs = self.aa.process_down(core);
        }

        let [bp2, lp2, lp4, lp4vca] = outputs.saturate(RIPPLES_SATURATION).to_array();
        frame.bp2 = bp2;
        frame.lp2 = lp2;
        frame.lp4 = lp4;
        frame.lp4vca = lp4vca;
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        let sample_rate = usable_sample_rate(sample_rate);
        self.sample_rate = sample_rate;
        self.sample_time = 1.0 / sample_rate;

        let factor = self.aa.init(sample_rate);
        let oversampled_rate = sample_rate * factor as f32;

        let freq_cut = 1.0 / (2.0 * PI * FREQ_AMP_R * FREQ_AMP_C);
        let res_cut = 1.0 / (2.0 * PI * RES_AMP_R * RES_AMP_C);
        let gain_cut = 1.0 / (2.0 * PI * GAIN_AMP_R * GAIN_AMP_C);
        let ff_cut = 1.0 / (2.0 * PI * FEEDFORWARD_R * FEEDFORWARD_C);
        self.rc_filters
            .set_cutoff_freq(F32x4::new(ff_cut, freq_cut, res_cut, gain_cut) / oversampled_rate);

        let vca_cut = 1.0 / (2.0 * PI * VCA_INPUT_R * VCA_INPUT_C);
        self.vca_hpf.set_cutoff_freq(vca_cut / oversampled_rate);

        #[cfg(feature = "tracing")]
        tracing::debug!("ripples_init: {} Hz, {}x oversampling", sample_rate, factor);

        self.reset();
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn reset(&mut self) {
        self.aa.reset();
        self.rc_filters.reset();
        self.vca_hpf.reset();
        self.cells = F32x4::ZERO;
        self.dither.reset();
    }

    fn outputs_finite(&self, frame: &RipplesFrame) -> bool {
        F32x4::new(frame.bp2, frame.lp2, frame.lp4, frame.lp4vca).all_finite()
    }

    fn silence_outputs(&self, frame: &mut RipplesFrame) {
        frame.bp2 = 0.0;
        frame.lp2 = 0.0;
        frame.lp4 = 0.0;
        frame.lp4vca = 0.0;
    }
}
