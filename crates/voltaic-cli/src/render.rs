//! Offline rendering of a session through an engine bank.

use voltaic_config::{BandConfig, EngineConfig, SessionConfig};
use voltaic_core::{Engine, EngineBank, MAX_CHANNELS};
use voltaic_engines::{
    RipplesEngine, RipplesFrame, ShelvesBand, ShelvesEngine, ShelvesFrame, StreamsEngine,
    StreamsFrame,
};

use crate::signal::TestSignal;

const RIPPLES_OUTPUTS: [&str; 4] = ["bp2", "lp2", "lp4", "lp4vca"];
const SHELVES_OUTPUTS: [&str; 7] = [
    "main", "p1_hp", "p1_bp", "p1_lp", "p2_hp", "p2_bp", "p2_lp",
];
const STREAMS_OUTPUTS: [&str; 2] = ["out1", "out2"];

/// Result of a render: interleaved output voltages.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// One frame per host sample, `outputs.len()` values per frame.
    pub samples: Vec<f32>,
    /// Output name for each interleaved channel.
    pub outputs: Vec<String>,
    /// Engines rebuilt after non-finite output.
    pub recoveries: u64,
}

impl Rendered {
    /// Interleaved channel count.
    pub fn channels(&self) -> usize {
        self.outputs.len()
    }
}

/// Render `session` with the engine it names.
///
/// Every bank channel is driven by its own copy of the test signal,
/// transposed up one semitone per channel. The output holds every engine
/// output of channel 0, then channel 1, and so on.
pub fn render(session: &SessionConfig) -> Rendered {
    let sample_rate = session.sample_rate as f32;
    match &session.engine {
        EngineConfig::Ripples {
            res,
            freq,
            fm,
            gain_cv,
        } => {
            let template = RipplesFrame {
                res_knob: *res,
                freq_knob: *freq,
                fm_knob: *fm,
                gain_cv: gain_cv.unwrap_or(0.0),
                gain_cv_connected: gain_cv.is_some(),
                ..Default::default()
            };
            let mut bank: Box<EngineBank<RipplesEngine>> =
                Box::new(EngineBank::new(sample_rate));
            render_bank(
                session,
                &mut bank,
                template,
                RIPPLES_OUTPUTS,
                |frame: &mut RipplesFrame, x: f32| frame.input = x,
                |frame: &RipplesFrame| [frame.bp2, frame.lp2, frame.lp4, frame.lp4vca],
            )
        }
        EngineConfig::Shelves {
            low_shelf,
            p1,
            p2,
            high_shelf,
            pre_gain,
        } => {
            let template = ShelvesFrame {
                low_shelf: shelves_band(low_shelf),
                p1: shelves_band(p1),
                p2: shelves_band(p2),
                high_shelf: shelves_band(high_shelf),
                pre_gain: *pre_gain,
                p2_hp_out_connected: true,
                p2_bp_out_connected: true,
                p2_lp_out_connected: true,
                ..Default::default()
            };
            let mut bank: Box<EngineBank<ShelvesEngine>> =
                Box::new(EngineBank::new(sample_rate));
            render_bank(
                session,
                &mut bank,
                template,
                SHELVES_OUTPUTS,
                |frame: &mut ShelvesFrame, x: f32| frame.main_in = x,
                |frame: &ShelvesFrame| {
                    [
                        frame.main_out,
                        frame.p1_hp_out,
                        frame.p1_bp_out,
                        frame.p1_lp_out,
                        frame.p2_hp_out,
                        frame.p2_bp_out,
                        frame.p2_lp_out,
                    ]
                },
            )
        }
        EngineConfig::Streams {
            level_mod,
            response,
            level_cv,
        } => {
            let mut template = StreamsFrame::default();
            for ch in [&mut template.ch1, &mut template.ch2] {
                ch.level_mod_knob = *level_mod;
                ch.response_knob = *response;
                ch.signal_in_connected = true;
                ch.level_cv = level_cv.unwrap_or(0.0);
                ch.level_cv_connected = level_cv.is_some();
            }
            let mut bank: Box<EngineBank<StreamsEngine>> =
                Box::new(EngineBank::new(sample_rate));
            render_bank(
                session,
                &mut bank,
                template,
                STREAMS_OUTPUTS,
                |frame: &mut StreamsFrame, x: f32| {
                    frame.ch1.signal_in = x;
                    frame.ch2.signal_in = x;
                },
                |frame: &StreamsFrame| [frame.ch1.signal_out, frame.ch2.signal_out],
            )
        }
    }
}

fn shelves_band(band: &BandConfig) -> ShelvesBand {
    ShelvesBand {
        freq_knob: band.freq,
        gain_knob: band.gain,
        q_knob: band.q,
        ..Default::default()
    }
}

fn render_bank<E, const N: usize>(
    session: &SessionConfig,
    bank: &mut EngineBank<E>,
    template: E::Frame,
    outputs: [&str; N],
    drive: impl Fn(&mut E::Frame, f32),
    read: impl Fn(&E::Frame) -> [f32; N],
) -> Rendered
where
    E: Engine + Default,
    E::Frame: Clone,
{
    let sample_rate = session.sample_rate as f32;
    let channels = session.channels.clamp(1, MAX_CHANNELS);
    bank.set_channels(channels);

    let mut frames = vec![template; channels];
    let mut signals: Vec<TestSignal> = (0..channels)
        .map(|ch| TestSignal::new(&session.signal, sample_rate, ch as f32, ch as u32 + 1))
        .collect();

    let frame_count = session.frame_count();
    tracing::debug!(
        engine = session.engine.kind(),
        channels,
        frames = frame_count,
        "render_start"
    );

    let mut samples = Vec::with_capacity(frame_count * channels * N);
    for _ in 0..frame_count {
        for (ch, (frame, signal)) in frames.iter_mut().zip(&mut signals).enumerate() {
            drive(frame, signal.next_sample());
            bank.process(ch, frame);
            samples.extend(read(frame));
        }
    }

    let names = (0..channels)
        .flat_map(|ch| {
            outputs.iter().map(move |name| {
                if channels == 1 {
                    (*name).to_string()
                } else {
                    format!("{name}.{ch}")
                }
            })
        })
        .collect();

    Rendered {
        samples,
        outputs: names,
        recoveries: bank.recoveries(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltaic_config::{SignalConfig, Waveform};

    fn session(engine: &str, channels: usize) -> SessionConfig {
        SessionConfig {
            channels,
            duration_secs: 0.05,
            engine: EngineConfig::from_kind(engine).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn ripples_writes_four_outputs_per_channel() {
        let rendered = render(&session("ripples", 2));
        assert_eq!(rendered.channels(), 8);
        assert_eq!(rendered.outputs[0], "bp2.0");
        assert_eq!(rendered.outputs[7], "lp4vca.1");
        assert_eq!(rendered.samples.len(), 2_400 * 8);
        assert!(rendered.samples.iter().all(|x| x.is_finite()));
        assert_eq!(rendered.recoveries, 0);
    }

    #[test]
    fn ripples_signal_drives_the_input_only() {
        let plain = session("ripples", 1);
        let mut full_fm = session("ripples", 1);
        if let EngineConfig::Ripples { fm, .. } = &mut full_fm.engine {
            *fm = 1.0;
        }
        // Nothing reaches the FM jack, so its attenuverter has no effect.
        assert_eq!(render(&plain).samples, render(&full_fm).samples);
    }

    #[test]
    fn shelves_mono_names_are_plain() {
        let rendered = render(&session("shelves", 1));
        assert_eq!(rendered.outputs, SHELVES_OUTPUTS);
        // Flat EQ passes the input through.
        let main: Vec<f32> = rendered.samples.iter().step_by(7).copied().collect();
        let peak = main[1_200..].iter().fold(0.0_f32, |m, x| m.max(x.abs()));
        assert!((peak - 5.0).abs() < 0.3, "{peak}");
    }

    #[test]
    fn streams_unpatched_level_is_normalled() {
        let mut s = session("streams", 1);
        s.signal = SignalConfig {
            waveform: Waveform::Silence,
            ..Default::default()
        };
        let rendered = render(&s);
        assert_eq!(rendered.channels(), 2);
        assert!(rendered.samples.iter().all(|x| x.abs() < 1e-4));
    }
}
