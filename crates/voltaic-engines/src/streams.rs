//! Dual VCA / low-pass gate with a digitally controlled analog section.
//!
//! Each channel is an exponential VCA followed by two one-pole VCA filter
//! cells. Level and cutoff are set by two control paths:
//!
//! - LEVEL CV through the LEVEL MOD attenuator, plus a DAC current from the
//!   digital section, shaped by the RESPONSE pot into an exponent
//! - A PWM voltage from the digital section that sets the filter cutoff
//!
//! [`StreamsAnalogEngine`] models the analog section alone, with the DAC and
//! PWM voltages as frame inputs. [`StreamsEngine`] wraps it with a
//! [`DigitalSection`] that runs in fixed blocks at [`DIGITAL_SAMPLE_RATE`],
//! connected through an [`InterpolatingResampler`] and fed back the analog
//! level through the ADC path, the way the module's processor sees it.

use core::f32::consts::PI;

use voltaic_core::{
    AaFilter, AaProfile, Engine, F32x4, FilterRole, InterpolatingResampler, RcFilter, Sample,
    SampleFrame, exp_vca_level, finite_or_zero, flush_denormal, linear_to_db, usable_sample_rate,
    vca_level_to_pin_voltage,
};

/// Op-amp rail, volts.
pub const STREAMS_SATURATION: f32 = 10.5;

// The 2164's maximum gain is +20 dB
const VCA_MAX_LEVEL: f32 = 10.0;

const LEVEL_CV_INPUT_R: f32 = 100e3;
const DAC_CV_OUTPUT_R: f32 = 11e3;
const DAC_CV_INPUT_R: f32 = 14e3;
const VCA_OFFSET_I: f32 = -10.0 / 10e6;
const PWM_CV_OUTPUT_R: f32 = 1.2e3;
const PWM_CV_INPUT_R: f32 = 2.5e3;

// Level response: reference current, pot and series resistor
const LEVEL_REF_I: f32 = 10.0 / 200e3;
const RESPONSE_POT_R: f32 = 10e3;
const RESPONSE_MIN_R: f32 = 510.0;

const DAC_FILTER_CUTOFF: f32 = 12.7e3;
const PWM_FILTER_CUTOFF: f32 = 242.0;

const FILTER_CORE_RC: f32 = 100e3 * 33e-12;

/// Rate the digital section runs at, Hz.
pub const DIGITAL_SAMPLE_RATE: f32 = 31_089.0;

/// Frames per digital block.
pub const DIGITAL_BLOCK_SIZE: usize = 16;

const RESAMPLER_BUFFER: usize = 256;

// Jack normals
const SIGNAL_IN_NORMAL_V: f32 = 5.0;
const LEVEL_NORMAL_V: f32 = 8.0;

// ADC input conditioning: inverting lowpass with an offset
const ADC_FILTER_CUTOFF: f32 = 1.0 / (2.0 * PI * 20e3 * 1e-9);
const ADC_FILTER_GAIN: f32 = -20e3 / 100e3;
const ADC_FILTER_OFFSET: f32 = -10.0 * -20e3 / 120e3;

/// VCA level for one channel's control currents.
///
/// `power = (510 + 10k) / (510 + 10k·response)` bends the curve from
/// linear (`response = 1`) to exponential (`response = 0`).
fn channel_level(dac_cv: f32, level_cv: f32, level_mod: f32, response: f32) -> f32 {
    let power =
        (RESPONSE_MIN_R + RESPONSE_POT_R) / (RESPONSE_MIN_R + RESPONSE_POT_R * response);
    let i_level = level_mod * level_cv / LEVEL_CV_INPUT_R;
    let i_dac = dac_cv / (DAC_CV_OUTPUT_R + DAC_CV_INPUT_R);
    let base = (i_level + i_dac + VCA_OFFSET_I) / LEVEL_REF_I;
    if base > 0.0 {
        libm::powf(base, power).min(VCA_MAX_LEVEL)
    } else {
        0.0
    }
}

/// One channel of the analog section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamsAnalogChannel {
    /// LEVEL CV attenuator, 0 to 1.
    pub level_mod_knob: f32,
    /// Response curve, 0 (exponential) to 1 (linear).
    pub response_knob: f32,

    /// Audio input.
    pub signal_in: f32,
    /// Level CV.
    pub level_cv: f32,
    /// DAC voltage from the digital section.
    pub dac_cv: f32,
    /// Filtered PWM voltage from the digital section.
    pub pwm_cv: f32,

    /// Audio output.
    pub signal_out: f32,
    /// VCA control-pin voltage reported back to the ADC.
    pub adc_out: f32,
}

impl Default for StreamsAnalogChannel {
    fn default() -> Self {
        Self {
            level_mod_knob: 0.5,
            response_knob: 0.5,
            signal_in: 0.0,
            level_cv: 0.0,
            dac_cv: 0.0,
            pwm_cv: 0.0,
            signal_out: 0.0,
            adc_out: 0.0,
        }
    }
}

/// One tick of the analog section, both channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreamsAnalogFrame {
    /// Channel 1.
    pub ch1: StreamsAnalogChannel,
    /// Channel 2.
    pub ch2: StreamsAnalogChannel,
}

/// Analog section of Streams.
///
/// Lanes of the upsampled vectors: `(signal 1, signal 2, level 1, level 2)`
/// and `(dac 1, dac 2, pwm 1, pwm 2)`. The filter state holds the first
/// cell of each channel in lanes 0 and 1 and the second in lanes 2 and 3.
///
/// The cells are solved with the exact exponential step
/// `v = (v_in + v)·e^(ω·dt) − v_in`, which stays stable at any cutoff.
#[derive(Debug, Clone)]
pub struct StreamsAnalogEngine {
    sample_rate: f32,
    sample_time: f32,
    oversampling: usize,
    analog_up: AaFilter<F32x4>,
    digital_up: AaFilter<F32x4>,
    down: AaFilter<F32x4>,
    digital_lpf: RcFilter<F32x4>,
    v_out: F32x4,
}

impl Default for StreamsAnalogEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl StreamsAnalogEngine {
    /// Create an engine configured for `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        let mut engine = Self {
            sample_rate,
            sample_time: 1.0 / sample_rate,
            oversampling: 1,
            analog_up: AaFilter::new(AaProfile::Dynamics, FilterRole::Upsampling),
            digital_up: AaFilter::new(AaProfile::Dynamics, FilterRole::Upsampling),
            down: AaFilter::new(AaProfile::Dynamics, FilterRole::Downsampling),
            digital_lpf: RcFilter::new(),
            v_out: F32x4::ZERO,
        };
        engine.set_sample_rate(sample_rate);
        engine
    }

    /// Oversampling factor at the configured rate.
    pub fn oversampling_factor(&self) -> usize {
        self.oversampling
    }
}

impl Engine for StreamsAnalogEngine {
    type Frame = StreamsAnalogFrame;

    fn process(&mut self, frame: &mut StreamsAnalogFrame) {
        let (ch1, ch2) = (&frame.ch1, &frame.ch2);
        let analog_in = F32x4::new(
            finite_or_zero(ch1.signal_in),
            finite_or_zero(ch2.signal_in),
            finite_or_zero(ch1.level_cv),
            finite_or_zero(ch2.level_cv),
        );
        let digital_in = F32x4::new(
            finite_or_zero(ch1.dac_cv),
            finite_or_zero(ch2.dac_cv),
            finite_or_zero(ch1.pwm_cv),
            finite_or_zero(ch2.pwm_cv),
        );
        let level_mod = [ch1.level_mod_knob, ch2.level_mod_knob];
        let response = [ch1.response_knob, ch2.response_knob];

        let factor = self.oversampling;
        let scale = factor as f32;
        let timestep = self.sample_time / scale;
        let mut output = F32x4::ZERO;

        // Audio is zero-stuffed; level and digital controls are held.
        let level_held = F32x4::new(0.0, 0.0, analog_in[2], analog_in[3]);
        let audio = F32x4::new(analog_in[0] * scale, analog_in[1] * scale, 0.0, 0.0);

        for i in 0..factor {
            let a = self
                .analog_up
                .process(if i == 0 { level_held + audio } else { level_held });
            self.digital_lpf.process(self.digital_up.process(digital_in));
            let d = self.digital_lpf.lowpass();

            let level = [
                channel_level(d[0], a[2], level_mod[0], response[0]),
                channel_level(d[1], a[3], level_mod[1], response[1]),
            ];

            let pwm = F32x4::new(d[2], d[3], d[2], d[3])
                * (PWM_CV_INPUT_R / (PWM_CV_INPUT_R + PWM_CV_OUTPUT_R));
            let rad_per_s = -pwm.map(exp_vca_level) / FILTER_CORE_RC;

            let v_in = F32x4::new(a[0] * level[0], a[1] * level[1], self.v_out[0], self.v_out[1]);
            self.v_out = ((v_in + self.v_out) * (rad_per_s * timestep).exp() - v_in)
                .map(flush_denormal)
                .saturate(STREAMS_SATURATION);

            output = self
                .down
                .process(F32x4::new(level[0], level[1], self.v_out[2], self.v_out[3]));
        }

        frame.ch1.signal_out = output[2].clamp(-STREAMS_SATURATION, STREAMS_SATURATION);
        frame.ch2.signal_out = output[3].clamp(-STREAMS_SATURATION, STREAMS_SATURATION);

        // Only used for metering, so the level is not anti-aliased further.
        frame.ch1.adc_out = vca_level_to_pin_voltage(output[0], STREAMS_SATURATION);
        frame.ch2.adc_out = vca_level_to_pin_voltage(output[1], STREAMS_SATURATION);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        let sample_rate = usable_sample_rate(sample_rate);
        self.sample_rate = sample_rate;
        self.sample_time = 1.0 / sample_rate;

        self.oversampling = self.analog_up.init(sample_rate);
        self.digital_up.init(sample_rate);
        self.down.init(sample_rate);

        let oversampled_rate = sample_rate * self.oversampling as f32;
        let cutoff = F32x4::new(
            DAC_FILTER_CUTOFF,
            DAC_FILTER_CUTOFF,
            PWM_FILTER_CUTOFF,
            PWM_FILTER_CUTOFF,
        );
        self.digital_lpf.set_cutoff_freq(cutoff / oversampled_rate);

        self.reset();
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn reset(&mut self) {
        self.analog_up.reset();
        self.digital_up.reset();
        self.down.reset();
        self.digital_lpf.reset();
        self.v_out = F32x4::ZERO;
    }

    fn outputs_finite(&self, frame: &StreamsAnalogFrame) -> bool {
        F32x4::new(
            frame.ch1.signal_out,
            frame.ch2.signal_out,
            frame.ch1.adc_out,
            frame.ch2.adc_out,
        )
        .all_finite()
    }

    fn silence_outputs(&self, frame: &mut StreamsAnalogFrame) {
        for ch in [&mut frame.ch1, &mut frame.ch2] {
            ch.signal_out = 0.0;
            ch.adc_out = 0.0;
        }
    }
}

/// Knob and button state passed to the digital section with every block.
///
/// Index 0 is channel 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DigitalControls {
    /// SHAPE knobs, 0 to 1.
    pub shape_knob: [f32; 2],
    /// MOD knobs, 0 to 1.
    pub mod_knob: [f32; 2],
    /// LEVEL MOD knobs, 0 to 1.
    pub level_mod_knob: [f32; 2],
    /// RESPONSE knobs, 0 to 1.
    pub response_knob: [f32; 2],
    /// FUNCTION buttons.
    pub function_button: [bool; 2],
    /// METERING button.
    pub metering_button: bool,
}

/// Front-panel LED intensities of one channel, 0 to 1.
///
/// Index 0 is the top LED of the column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelLights {
    /// Green LEDs.
    pub green: [f32; 4],
    /// Red LEDs.
    pub red: [f32; 4],
}

/// Block processor standing in for the module's microcontroller.
///
/// Called with [`DIGITAL_BLOCK_SIZE`] frames at [`DIGITAL_SAMPLE_RATE`].
///
/// Input frame lanes are ADC voltages:
/// `[signal 1, signal 2, excite 1, excite 2, level 1, level 2]`.
/// Output frame lanes are volts driving the analog section:
/// `[dac 1, pwm 1, dac 2, pwm 2]`. Every output frame must be written.
///
/// `lights` holds the LED state left by the previous block, index 0 for
/// channel 1; sections update whichever LEDs they drive.
pub trait DigitalSection {
    /// Process one block.
    fn process_block(
        &mut self,
        controls: &DigitalControls,
        input: &[SampleFrame<6>],
        output: &mut [SampleFrame<4>],
        lights: &mut [ChannelLights; 2],
    );

    /// Return to the power-on state.
    fn reset(&mut self);
}

// Level meter segments, bottom green LED first.
const METER_THRESHOLDS_DB: [f32; 4] = [-36.0, -24.0, -12.0, -3.0];

/// Digital section that leaves DAC and PWM at 0 V.
///
/// The module then behaves as a LEVEL-CV-controlled VCA/LPG with the filter
/// fully open. The green LEDs meter each channel's VCA gain from the level
/// ADC from the bottom up; the top red LED lights when the VCA amplifies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualVca;

impl DigitalSection for ManualVca {
    fn process_block(
        &mut self,
        _controls: &DigitalControls,
        input: &[SampleFrame<6>],
        output: &mut [SampleFrame<4>],
        lights: &mut [ChannelLights; 2],
    ) {
        output.fill(SampleFrame::SILENCE);

        let Some(last) = input.last() else {
            return;
        };
        for (ch, channel_lights) in lights.iter_mut().enumerate() {
            let gain_db = linear_to_db(exp_vca_level(last.samples[4 + ch]));
            for (led, threshold) in METER_THRESHOLDS_DB.iter().enumerate() {
                channel_lights.green[3 - led] = if gain_db >= *threshold { 1.0 } else { 0.0 };
            }
            channel_lights.red = [0.0; 4];
            channel_lights.red[0] = if gain_db > 0.0 { 1.0 } else { 0.0 };
        }
    }

    fn reset(&mut self) {}
}

/// Panel controls and jacks of one Streams channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamsChannel {
    /// SHAPE knob, 0 to 1.
    pub shape_knob: f32,
    /// MOD knob, 0 to 1.
    pub mod_knob: f32,
    /// LEVEL MOD knob, 0 to 1.
    pub level_mod_knob: f32,
    /// RESPONSE knob, 0 to 1.
    pub response_knob: f32,
    /// FUNCTION button held.
    pub function_button: bool,

    /// EXCITE input.
    pub excite_in: f32,
    /// IN input.
    pub signal_in: f32,
    /// LEVEL input.
    pub level_cv: f32,
    /// False normals IN to 5 V.
    pub signal_in_connected: bool,
    /// False normals LEVEL to 8 V.
    pub level_cv_connected: bool,

    /// OUT output.
    pub signal_out: f32,
    /// Green LED intensities, top first.
    pub led_green: [f32; 4],
    /// Red LED intensities, top first.
    pub led_red: [f32; 4],
}

impl Default for StreamsChannel {
    fn default() -> Self {
        Self {
            shape_knob: 0.5,
            mod_knob: 0.5,
            level_mod_knob: 0.5,
            response_knob: 0.5,
            function_button: false,
            excite_in: 0.0,
            signal_in: 0.0,
            level_cv: 0.0,
            signal_in_connected: false,
            level_cv_connected: false,
            signal_out: 0.0,
            led_green: [0.0; 4],
            led_red: [0.0; 4],
        }
    }
}

impl StreamsChannel {
    fn signal(&self) -> f32 {
        if self.signal_in_connected {
            finite_or_zero(self.signal_in)
        } else {
            SIGNAL_IN_NORMAL_V
        }
    }

    fn level(&self) -> f32 {
        if self.level_cv_connected {
            finite_or_zero(self.level_cv)
        } else {
            LEVEL_NORMAL_V
        }
    }
}

/// One tick of the whole module.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreamsFrame {
    /// Channel 1.
    pub ch1: StreamsChannel,
    /// Channel 2.
    pub ch2: StreamsChannel,
    /// METERING button held.
    pub metering_button: bool,
    /// True when a digital block ran this tick and refreshed the LEDs.
    pub lights_updated: bool,
}

impl StreamsFrame {
    fn controls(&self) -> DigitalControls {
        DigitalControls {
            shape_knob: [self.ch1.shape_knob, self.ch2.shape_knob],
            mod_knob: [self.ch1.mod_knob, self.ch2.mod_knob],
            level_mod_knob: [self.ch1.level_mod_knob, self.ch2.level_mod_knob],
            response_knob: [self.ch1.response_knob, self.ch2.response_knob],
            function_button: [self.ch1.function_button, self.ch2.function_button],
            metering_button: self.metering_button,
        }
    }
}

/// Streams with a digital section `D`.
///
/// Per host tick: apply jack normals, condition the ADC inputs, push one
/// frame into the resampler (which runs `D` whenever a block is ready and
/// returns the interpolated DAC/PWM voltages), run the analog section, and
/// keep its level readings for the next tick's ADC frame.
#[derive(Debug, Clone)]
pub struct StreamsEngine<D: DigitalSection = ManualVca> {
    sample_rate: f32,
    adc_lpf: RcFilter<F32x4>,
    resampler: InterpolatingResampler<6, 4, DIGITAL_BLOCK_SIZE, RESAMPLER_BUFFER>,
    analog: StreamsAnalogEngine,
    digital: D,
    lights: [ChannelLights; 2],
    adc_feedback: [f32; 2],
}

impl<D: DigitalSection + Default> Default for StreamsEngine<D> {
    fn default() -> Self {
        Self::new(48000.0, D::default())
    }
}

impl<D: DigitalSection> StreamsEngine<D> {
    /// Create an engine around `digital`, configured for `sample_rate`.
    pub fn new(sample_rate: f32, digital: D) -> Self {
        let mut engine = Self {
            sample_rate,
            adc_lpf: RcFilter::new(),
            resampler: InterpolatingResampler::new(sample_rate, DIGITAL_SAMPLE_RATE),
            analog: StreamsAnalogEngine::new(sample_rate),
            digital,
            lights: [ChannelLights::default(); 2],
            adc_feedback: [0.0; 2],
        };
        engine.set_sample_rate(sample_rate);
        engine
    }

    /// The digital section.
    pub fn digital(&self) -> &D {
        &self.digital
    }

    /// The analog section.
    pub fn analog(&self) -> &StreamsAnalogEngine {
        &self.analog
    }
}

impl<D: DigitalSection> Engine for StreamsEngine<D> {
    type Frame = StreamsFrame;

    fn process(&mut self, frame: &mut StreamsFrame) {
        let signal = [frame.ch1.signal(), frame.ch2.signal()];
        let level = [frame.ch1.level(), frame.ch2.level()];

        self.adc_lpf.process(F32x4::new(
            signal[0],
            signal[1],
            finite_or_zero(frame.ch1.excite_in),
            finite_or_zero(frame.ch2.excite_in),
        ));
        let adc = self.adc_lpf.lowpass() * ADC_FILTER_GAIN + ADC_FILTER_OFFSET;
        let adc_frame = SampleFrame::new([
            adc[0],
            adc[1],
            adc[2],
            adc[3],
            self.adc_feedback[0],
            self.adc_feedback[1],
        ]);

        let controls = frame.controls();
        let digital = &mut self.digital;
        let lights = &mut self.lights;
        let mut lights_updated = false;
        let [dac1, pwm1, dac2, pwm2] = self
            .resampler
            .process(adc_frame, |input, output| {
                digital.process_block(&controls, input, output, lights);
                lights_updated = true;
            })
            .samples;

        frame.lights_updated = lights_updated;
        frame.ch1.led_green = self.lights[0].green;
        frame.ch1.led_red = self.lights[0].red;
        frame.ch2.led_green = self.lights[1].green;
        frame.ch2.led_red = self.lights[1].red;

        let mut analog = StreamsAnalogFrame {
            ch1: StreamsAnalogChannel {
                level_mod_knob: frame.ch1.level_mod_knob,
                response_knob: frame.ch1.response_knob,
                signal_in: signal[0],
                level_cv: level[0],
                dac_cv: dac1,
                pwm_cv: pwm1,
                ..Default::default()
            },
            ch2: StreamsAnalogChannel {
                level_mod_knob: frame.ch2.level_mod_knob,
                response_knob: frame.ch2.response_knob,
                signal_in: signal[1],
                level_cv: level[1],
                dac_cv: dac2,
                pwm_cv: pwm2,
                ..Default::default()
            },
        };
        self.analog.process(&mut analog);

        frame.ch1.signal_out = analog.ch1.signal_out;
        frame.ch2.signal_out = analog.ch2.signal_out;
        self.adc_feedback = [analog.ch1.adc_out, analog.ch2.adc_out];
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        let sample_rate = usable_sample_rate(sample_rate);
        self.sample_rate = sample_rate;
        self.adc_lpf
            .set_cutoff_freq(F32x4::splat(ADC_FILTER_CUTOFF / sample_rate));
        self.resampler.init(sample_rate, DIGITAL_SAMPLE_RATE);
        self.analog.set_sample_rate(sample_rate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "streams_init: {} Hz, {}x oversampling, {:.4} digital frames per tick",
            sample_rate,
            self.analog.oversampling_factor(),
            self.resampler.ratio()
        );

        self.reset();
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn reset(&mut self) {
        self.adc_lpf.reset();
        self.resampler.reset();
        self.analog.reset();
        self.digital.reset();
        self.lights = [ChannelLights::default(); 2];
        self.adc_feedback = [0.0; 2];
    }

    fn outputs_finite(&self, frame: &StreamsFrame) -> bool {
        frame.ch1.signal_out.is_finite() && frame.ch2.signal_out.is_finite()
    }

    fn silence_outputs(&self, frame: &mut StreamsFrame) {
        frame.ch1.signal_out = 0.0;
        frame.ch2.signal_out = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle_analog(engine: &mut StreamsAnalogEngine, frame: &mut StreamsAnalogFrame, n: usize) {
        for _ in 0..n {
            engine.process(frame);
        }
    }

    #[test]
    fn level_law_endpoints() {
        // Response fully clockwise is linear.
        let linear = channel_level(0.0, 5.0, 1.0, 1.0);
        assert!((linear - 0.98).abs() < 1e-5, "{linear}");
        // No control current closes the VCA.
        assert_eq!(channel_level(0.0, 0.0, 1.0, 0.5), 0.0);
        assert_eq!(channel_level(0.0, -5.0, 1.0, 0.5), 0.0);
        // The exponential end bends the same current further.
        let expo = channel_level(0.0, 5.0, 1.0, 0.0);
        assert!(expo < linear);
        // Gain tops out at +20 dB.
        assert_eq!(channel_level(10.0, 10.0, 1.0, 0.0), VCA_MAX_LEVEL);
    }

    #[test]
    fn dynamics_oversampling() {
        assert_eq!(StreamsAnalogEngine::new(48_000.0).oversampling_factor(), 2);
        assert_eq!(StreamsAnalogEngine::new(8_000.0).oversampling_factor(), 10);
        assert_eq!(StreamsAnalogEngine::new(96_000.0).oversampling_factor(), 1);
    }

    #[test]
    fn analog_vca_scales_dc() {
        let mut engine = StreamsAnalogEngine::new(48_000.0);
        let mut frame = StreamsAnalogFrame::default();
        for ch in [&mut frame.ch1, &mut frame.ch2] {
            ch.level_mod_knob = 1.0;
            ch.response_knob = 1.0;
            ch.signal_in = 1.0;
        }
        frame.ch1.level_cv = 5.0;
        frame.ch2.level_cv = 0.0;
        settle_analog(&mut engine, &mut frame, 4_800);
        // Two inverting cells in series: non-inverting overall.
        assert!((frame.ch1.signal_out - 0.98).abs() < 1e-3, "{}", frame.ch1.signal_out);
        assert!(frame.ch2.signal_out.abs() < 1e-6, "{}", frame.ch2.signal_out);
        let expected_pin = vca_level_to_pin_voltage(0.98, STREAMS_SATURATION);
        assert!((frame.ch1.adc_out - expected_pin).abs() < 1e-3);
        assert!(frame.ch2.adc_out > 5.0, "closed VCA pin {}", frame.ch2.adc_out);
    }

    #[test]
    fn pwm_closes_the_filter() {
        let mut open = StreamsAnalogEngine::new(48_000.0);
        let mut closed = StreamsAnalogEngine::new(48_000.0);
        let mut frame_open = StreamsAnalogFrame::default();
        frame_open.ch1.level_mod_knob = 1.0;
        frame_open.ch1.response_knob = 1.0;
        frame_open.ch1.level_cv = 5.0;
        let mut frame_closed = frame_open;
        // Positive pin voltage lowers the cell VCA gain.
        frame_closed.ch1.pwm_cv = 3.0;

        let mut peak_open = 0.0_f32;
        let mut peak_closed = 0.0_f32;
        for i in 0..9_600 {
            let x = libm::sinf(2.0 * PI * 5_000.0 * i as f32 / 48_000.0);
            frame_open.ch1.signal_in = x;
            frame_closed.ch1.signal_in = x;
            open.process(&mut frame_open);
            closed.process(&mut frame_closed);
            if i > 4_800 {
                peak_open = peak_open.max(frame_open.ch1.signal_out.abs());
                peak_closed = peak_closed.max(frame_closed.ch1.signal_out.abs());
            }
        }
        assert!(peak_open > 0.9, "open peak {peak_open}");
        assert!(peak_closed < 0.1, "closed peak {peak_closed}");
    }

    #[test]
    fn normals_drive_unpatched_jacks() {
        let mut engine: StreamsEngine = StreamsEngine::default();
        let mut frame = StreamsFrame::default();
        frame.ch1.level_mod_knob = 0.2;
        frame.ch1.response_knob = 1.0;
        for _ in 0..4_800 {
            engine.process(&mut frame);
        }
        // 5 V in, 0.2 · 8 V on LEVEL: 15 uA against 50 uA gives 0.3.
        assert!((frame.ch1.signal_out - 1.5).abs() < 0.01, "{}", frame.ch1.signal_out);
    }

    #[test]
    fn patched_silence_stays_silent() {
        let mut engine: StreamsEngine = StreamsEngine::new(44_100.0, ManualVca);
        let mut frame = StreamsFrame::default();
        for ch in [&mut frame.ch1, &mut frame.ch2] {
            ch.signal_in_connected = true;
            ch.level_cv_connected = true;
        }
        for _ in 0..4_410 {
            engine.process(&mut frame);
            assert!(frame.ch1.signal_out.abs() < 1e-4);
            assert!(frame.ch2.signal_out.abs() < 1e-4);
        }
    }

    /// Holds a fixed DAC voltage and counts the frames it sees.
    #[derive(Debug, Default)]
    struct FixedDac {
        dac: f32,
        frames: usize,
        last_adc: [f32; 6],
    }

    impl DigitalSection for FixedDac {
        fn process_block(
            &mut self,
            _controls: &DigitalControls,
            input: &[SampleFrame<6>],
            output: &mut [SampleFrame<4>],
            _lights: &mut [ChannelLights; 2],
        ) {
            self.frames += input.len();
            if let Some(last) = input.last() {
                self.last_adc = last.samples;
            }
            output.fill(SampleFrame::new([self.dac, 0.0, self.dac, 0.0]));
        }

        fn reset(&mut self) {
            self.frames = 0;
        }
    }

    #[test]
    fn digital_section_runs_at_its_own_rate() {
        let dac = FixedDac {
            dac: 1.0,
            ..Default::default()
        };
        let mut engine = StreamsEngine::new(48_000.0, dac);
        let mut frame = StreamsFrame::default();
        for ch in [&mut frame.ch1, &mut frame.ch2] {
            ch.signal_in = 1.0;
            ch.signal_in_connected = true;
            ch.level_cv_connected = true;
            ch.response_knob = 1.0;
        }
        for _ in 0..48_000 {
            engine.process(&mut frame);
        }
        let frames = engine.digital().frames;
        assert!(frames.abs_diff(31_089) <= DIGITAL_BLOCK_SIZE, "{frames} frames");

        // 1 V DAC: 40 uA - 1 uA offset against 50 uA.
        assert!((frame.ch1.signal_out - 0.78).abs() < 0.01, "{}", frame.ch1.signal_out);

        // ADC conditioning maps 1 V to 1.667 - 0.2 V.
        let adc = engine.digital().last_adc;
        assert!((adc[0] - (ADC_FILTER_OFFSET - 0.2)).abs() < 1e-3, "{adc:?}");
        // Level feedback reports the VCA pin voltage for 0.78.
        let pin = vca_level_to_pin_voltage(0.78, STREAMS_SATURATION);
        assert!((adc[4] - pin).abs() < 0.01, "{adc:?}");
    }

    #[test]
    fn reset_clears_digital_section() {
        let mut engine = StreamsEngine::new(48_000.0, FixedDac::default());
        let mut frame = StreamsFrame::default();
        for _ in 0..1_000 {
            engine.process(&mut frame);
        }
        assert!(engine.digital().frames > 0);
        engine.reset();
        assert_eq!(engine.digital().frames, 0);
    }

    #[test]
    fn manual_vca_meters_the_level() {
        let mut engine: StreamsEngine = StreamsEngine::new(48_000.0, ManualVca);
        let mut frame = StreamsFrame::default();
        // Normalled LEVEL at half LEVEL MOD: gain 0.62, about -4 dB.
        frame.ch2.level_cv_connected = true;
        frame.ch2.level_cv = 10.0;
        frame.ch2.level_mod_knob = 1.0;
        frame.ch2.response_knob = 1.0;

        let mut updates: usize = 0;
        for _ in 0..48_000 {
            engine.process(&mut frame);
            if frame.lights_updated {
                updates += 1;
            }
        }
        assert_eq!(frame.ch1.led_green, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(frame.ch1.led_red, [0.0; 4]);
        // 10 V at full LEVEL MOD: gain 1.98, the VCA amplifies.
        assert_eq!(frame.ch2.led_green, [1.0; 4]);
        assert_eq!(frame.ch2.led_red, [1.0, 0.0, 0.0, 0.0]);

        // One refresh per digital block.
        let blocks = 31_089 / DIGITAL_BLOCK_SIZE;
        assert!(updates.abs_diff(blocks) <= 2, "{updates} updates");
    }

    #[test]
    fn reset_darkens_the_lights() {
        let mut engine: StreamsEngine = StreamsEngine::default();
        let mut frame = StreamsFrame::default();
        for _ in 0..4_800 {
            engine.process(&mut frame);
        }
        assert!(frame.ch1.led_green.iter().any(|&x| x > 0.0));
        engine.reset();
        // The primed silent block is read before the next digital block.
        engine.process(&mut frame);
        assert!(!frame.lights_updated);
        assert_eq!(frame.ch1.led_green, [0.0; 4]);
    }

    #[test]
    fn reconfiguring_twice_matches_once() {
        let mut once: StreamsEngine = StreamsEngine::new(44_100.0, ManualVca);
        let mut twice: StreamsEngine = StreamsEngine::new(96_000.0, ManualVca);
        twice.set_sample_rate(44_100.0);
        twice.set_sample_rate(44_100.0);

        let mut a = StreamsFrame::default();
        a.ch1.signal_in_connected = true;
        a.ch1.response_knob = 0.2;
        let mut b = a;
        for i in 0..4_410 {
            let x = 4.0 * libm::sinf(2.0 * PI * 330.0 * i as f32 / 44_100.0);
            a.ch1.signal_in = x;
            b.ch1.signal_in = x;
            once.process(&mut a);
            twice.process(&mut b);
            assert_eq!(a, b, "tick {i}");
        }
    }

    #[test]
    fn non_positive_rates_fall_back_to_the_lowest_table() {
        for rate in [0.0, -1.0, f32::NAN] {
            let mut engine: StreamsEngine = StreamsEngine::new(rate, ManualVca);
            assert_eq!(engine.sample_rate(), 8_000.0);
            assert_eq!(engine.analog().oversampling_factor(), 10);
            let mut frame = StreamsFrame::default();
            for _ in 0..800 {
                engine.process(&mut frame);
                assert!(engine.outputs_finite(&frame));
            }
        }
    }

    #[test]
    fn poisoned_filter_state_is_rebuilt_by_the_bank() {
        let mut bank: voltaic_core::EngineBank<StreamsAnalogEngine> =
            voltaic_core::EngineBank::new(48_000.0);
        let mut frame = StreamsAnalogFrame::default();
        frame.ch1.level_cv = 5.0;
        frame.ch1.signal_in = 1.0;
        settle_bank(&mut bank, &mut frame, 480);
        assert_eq!(bank.recoveries(), 0);

        if let Some(engine) = bank.engine_mut(0) {
            engine.v_out = F32x4::splat(f32::NAN);
        }
        bank.process(0, &mut frame);
        assert_eq!(bank.recoveries(), 1);
        assert_eq!(frame.ch1.signal_out, 0.0);

        bank.process(0, &mut frame);
        assert_eq!(bank.recoveries(), 1);
        assert!(frame.ch1.signal_out.is_finite());
    }

    fn settle_bank(
        bank: &mut voltaic_core::EngineBank<StreamsAnalogEngine>,
        frame: &mut StreamsAnalogFrame,
        n: usize,
    ) {
        for _ in 0..n {
            bank.process(0, frame);
        }
    }
}
