//! Integration tests for voltaic-engines.
//!
//! Drives complete engines the way a host does: one frame per sample, knobs
//! and jacks set up front, outputs measured after the filters settle.

use std::f32::consts::PI;
use voltaic_core::{Engine, EngineBank, SupportedRate, Xorshift32};
use voltaic_engines::{
    RIPPLES_SATURATION, RipplesEngine, RipplesFrame, SHELVES_SATURATION, STREAMS_SATURATION,
    ShelvesEngine, ShelvesFrame, StreamsEngine, StreamsFrame,
};

fn rms(signal: &[f32]) -> f32 {
    (signal.iter().map(|x| x * x).sum::<f32>() / signal.len() as f32).sqrt()
}

fn to_db(gain: f32) -> f32 {
    20.0 * gain.log10()
}

/// Feed a sine through Ripples and return the steady-state gains of
/// LP2 and LP4 in dB.
fn ripples_gain_db(sample_rate: f32, cutoff: f32, tone: f32, len: usize) -> (f32, f32) {
    let mut engine = RipplesEngine::new(sample_rate);
    let mut frame = RipplesFrame {
        freq_knob: RipplesFrame::freq_knob_for_cutoff(cutoff),
        ..Default::default()
    };
    let mut input = Vec::with_capacity(len);
    let mut lp2 = Vec::with_capacity(len);
    let mut lp4 = Vec::with_capacity(len);
    for i in 0..len {
        frame.input = 0.5 * (2.0 * PI * tone * i as f32 / sample_rate).sin();
        engine.process(&mut frame);
        input.push(frame.input);
        lp2.push(frame.lp2);
        lp4.push(frame.lp4);
    }
    let settle = len / 2;
    let reference = rms(&input[settle..]);
    (
        to_db(rms(&lp2[settle..]) / reference),
        to_db(rms(&lp4[settle..]) / reference),
    )
}

#[test]
fn ripples_lp4_is_down_twelve_db_at_cutoff() {
    let (lp2_db, lp4_db) = ripples_gain_db(48_000.0, 1_000.0, 1_000.0, 4_096);
    assert!((lp4_db + 12.0).abs() < 3.0, "LP4 at cutoff: {lp4_db:.2} dB");
    assert!(lp2_db > lp4_db, "LP2 {lp2_db:.2} dB vs LP4 {lp4_db:.2} dB");
}

#[test]
fn ripples_passband_is_unity() {
    let (lp2_db, lp4_db) = ripples_gain_db(48_000.0, 1_000.0, 100.0, 9_600);
    assert!(lp4_db.abs() < 1.0, "LP4 at 100 Hz: {lp4_db:.2} dB");
    assert!(lp2_db.abs() < 1.0, "LP2 at 100 Hz: {lp2_db:.2} dB");
}

#[test]
fn ripples_cutoff_tracks_across_rates() {
    for rate in [44_100.0, 96_000.0, 192_000.0] {
        let (_, lp4_db) = ripples_gain_db(rate, 1_000.0, 1_000.0, rate as usize / 8);
        assert!((lp4_db + 12.0).abs() < 3.0, "{rate} Hz: LP4 {lp4_db:.2} dB");
    }
}

#[test]
fn silent_input_gives_silent_output() {
    let mut ripples = RipplesEngine::new(48_000.0);
    let mut ripples_frame = RipplesFrame::default();
    let mut shelves = ShelvesEngine::new(48_000.0);
    let mut shelves_frame = ShelvesFrame::default();
    shelves_frame.p1.gain_knob = 1.0;
    shelves_frame.low_shelf.gain_knob = -1.0;
    let mut streams: StreamsEngine = StreamsEngine::new(48_000.0, Default::default());
    let mut streams_frame = StreamsFrame::default();
    streams_frame.ch1.signal_in_connected = true;
    streams_frame.ch2.signal_in_connected = true;

    for i in 0..9_600 {
        ripples.process(&mut ripples_frame);
        shelves.process(&mut shelves_frame);
        streams.process(&mut streams_frame);
        if i > 4_800 {
            for out in [
                ripples_frame.bp2,
                ripples_frame.lp2,
                ripples_frame.lp4,
                ripples_frame.lp4vca,
                shelves_frame.main_out,
                shelves_frame.p1_bp_out,
                streams_frame.ch1.signal_out,
                streams_frame.ch2.signal_out,
            ] {
                assert!(out.abs() < 1e-4, "tick {i}: {out}");
            }
        }
    }
}

/// Run `engine` for 0.1 s and return the largest output seen in the second
/// half.
fn settled_peak<E: Engine>(
    engine: &mut E,
    frame: &mut E::Frame,
    outputs: impl Fn(&E::Frame) -> Vec<f32>,
) -> Vec<f32> {
    let ticks = (engine.sample_rate() / 10.0) as usize;
    let mut peak = Vec::new();
    for i in 0..ticks {
        engine.process(frame);
        let out = outputs(&*frame);
        if peak.is_empty() {
            peak = vec![0.0f32; out.len()];
        }
        if i >= ticks / 2 {
            for (p, x) in peak.iter_mut().zip(out) {
                *p = p.max(x.abs());
            }
        }
    }
    peak
}

/// Same as [`settled_peak`] but returns the final outputs.
fn settled_value<E: Engine>(
    engine: &mut E,
    frame: &mut E::Frame,
    outputs: impl Fn(&E::Frame) -> Vec<f32>,
) -> Vec<f32> {
    let ticks = (engine.sample_rate() / 10.0) as usize;
    for _ in 0..ticks {
        engine.process(frame);
    }
    outputs(&*frame)
}

fn ripples_outputs(f: &RipplesFrame) -> Vec<f32> {
    vec![f.bp2, f.lp2, f.lp4, f.lp4vca]
}

fn shelves_outputs(f: &ShelvesFrame) -> Vec<f32> {
    vec![
        f.main_out,
        f.p1_hp_out,
        f.p1_bp_out,
        f.p1_lp_out,
        f.p2_hp_out,
        f.p2_bp_out,
        f.p2_lp_out,
    ]
}

fn streams_outputs(f: &StreamsFrame) -> Vec<f32> {
    vec![f.ch1.signal_out, f.ch2.signal_out]
}

fn patched_streams_frame(signal: f32, level: f32) -> StreamsFrame {
    let mut frame = StreamsFrame::default();
    for ch in [&mut frame.ch1, &mut frame.ch2] {
        ch.signal_in = signal;
        ch.signal_in_connected = true;
        ch.level_cv = level;
        ch.level_cv_connected = true;
        ch.level_mod_knob = 1.0;
        ch.response_knob = 1.0;
    }
    frame
}

#[test]
fn silence_stays_silent_at_every_rate() {
    for rate in SupportedRate::ALL {
        let hz = rate.hz() as f32;

        let mut ripples = RipplesEngine::new(hz);
        let peak = settled_peak(&mut ripples, &mut RipplesFrame::default(), ripples_outputs);
        assert!(peak.iter().all(|&x| x < 1e-4), "Ripples at {hz} Hz: {peak:?}");

        let mut shelves = ShelvesEngine::new(hz);
        let mut frame = ShelvesFrame {
            p2_bp_out_connected: true,
            ..Default::default()
        };
        frame.p1.gain_knob = 1.0;
        frame.low_shelf.gain_knob = -1.0;
        frame.global_freq_cv_connected = true;
        let peak = settled_peak(&mut shelves, &mut frame, shelves_outputs);
        assert!(peak.iter().all(|&x| x < 1e-4), "Shelves at {hz} Hz: {peak:?}");

        let mut streams: StreamsEngine = StreamsEngine::new(hz, Default::default());
        let mut frame = patched_streams_frame(0.0, 5.0);
        let peak = settled_peak(&mut streams, &mut frame, streams_outputs);
        assert!(peak.iter().all(|&x| x < 1e-4), "Streams at {hz} Hz: {peak:?}");
    }
}

#[test]
fn dc_tracks_at_every_rate() {
    for rate in SupportedRate::ALL {
        let hz = rate.hz() as f32;

        // Four inverting cells and an inverting output amplifier.
        let mut ripples = RipplesEngine::new(hz);
        let mut frame = RipplesFrame {
            input: 1.0,
            ..Default::default()
        };
        let lp4 = settled_value(&mut ripples, &mut frame, ripples_outputs)[2];
        assert!((lp4 + 1.0).abs() < 0.05, "Ripples at {hz} Hz: lp4 {lp4}");

        // Centered gains are flat.
        let mut shelves = ShelvesEngine::new(hz);
        let mut frame = ShelvesFrame {
            main_in: 1.0,
            ..Default::default()
        };
        frame.global_gain_cv_connected = true;
        let main = settled_value(&mut shelves, &mut frame, shelves_outputs)[0];
        assert!((main - 1.0).abs() < 0.05, "Shelves at {hz} Hz: main {main}");

        // 5 V on LEVEL, linear response: 49 uA against 50 uA.
        let mut streams: StreamsEngine = StreamsEngine::new(hz, Default::default());
        let mut frame = patched_streams_frame(1.0, 5.0);
        let out = settled_value(&mut streams, &mut frame, streams_outputs);
        for x in out {
            assert!((x - 0.98).abs() < 0.02, "Streams at {hz} Hz: out {x}");
        }
    }
}

#[test]
fn non_positive_rates_run_at_the_lowest_table() {
    for rate in [0.0, -1.0, f32::NAN] {
        let mut ripples: EngineBank<RipplesEngine> = EngineBank::new(rate);
        let mut shelves: EngineBank<ShelvesEngine> = EngineBank::new(rate);
        let mut streams: Box<EngineBank<StreamsEngine>> = Box::new(EngineBank::new(rate));
        let mut r = RipplesFrame::default();
        let mut s = ShelvesFrame::default();
        let mut t = StreamsFrame::default();
        for _ in 0..800 {
            ripples.process(0, &mut r);
            shelves.process(0, &mut s);
            streams.process(0, &mut t);
        }
        assert_eq!(ripples.engine(0).map(Engine::sample_rate), Some(8_000.0));
        assert_eq!(streams.engine(0).map(Engine::sample_rate), Some(8_000.0));
        assert_eq!(
            ripples.recoveries() + shelves.recoveries() + streams.recoveries(),
            0,
            "{rate}"
        );
    }
}

#[test]
fn bank_recovers_from_nan_knob() {
    let mut bank: EngineBank<ShelvesEngine> = EngineBank::new(48_000.0);
    bank.set_channels(2);
    let mut frame = ShelvesFrame {
        main_in: 1.0,
        ..Default::default()
    };
    for _ in 0..64 {
        bank.process(0, &mut frame);
    }
    assert_eq!(bank.recoveries(), 0);

    frame.p1.freq_knob = f32::NAN;
    bank.process(0, &mut frame);
    assert_eq!(bank.recoveries(), 1);
    assert_eq!(frame.main_out, 0.0);

    frame.p1.freq_knob = 0.5;
    bank.process(0, &mut frame);
    assert_eq!(bank.recoveries(), 1);
    assert!(frame.main_out.is_finite());
    assert!(frame.main_out.abs() <= SHELVES_SATURATION);
}

#[test]
fn bank_channels_are_independent() {
    let mut bank: EngineBank<RipplesEngine> = EngineBank::new(48_000.0);
    bank.set_channels(3);
    let mut loud = RipplesFrame::default();
    let mut quiet = RipplesFrame::default();
    let mut loud_peak = 0.0_f32;
    let mut quiet_peak = 0.0_f32;
    for i in 0..2_048 {
        loud.input = 5.0 * (2.0 * PI * 220.0 * i as f32 / 48_000.0).sin();
        bank.process(0, &mut loud);
        bank.process(2, &mut quiet);
        loud_peak = loud_peak.max(loud.lp4.abs());
        quiet_peak = quiet_peak.max(quiet.lp4.abs());
    }
    assert!(loud_peak > 1.0, "{loud_peak}");
    assert!(quiet_peak < 1e-4, "{quiet_peak}");

    // Channels beyond the active count only produce silence.
    let mut inactive = RipplesFrame {
        input: 5.0,
        lp4: 1.0,
        ..Default::default()
    };
    bank.process(7, &mut inactive);
    assert_eq!(inactive.lp4, 0.0);
}

#[test]
fn resonant_ripples_survives_long_noise_run() {
    let mut a = RipplesEngine::new(44_100.0);
    let mut b = RipplesEngine::new(44_100.0);
    let mut frame_a = RipplesFrame {
        res_knob: 0.95,
        freq_knob: 0.8,
        fm_knob: 0.5,
        ..Default::default()
    };
    let mut frame_b = frame_a;
    let mut noise = Xorshift32::default();

    // Ten seconds of full-scale noise into both inputs.
    for _ in 0..441_000 {
        let x = (noise.uniform() - 0.5) * 20.0;
        let fm = (noise.uniform() - 0.5) * 10.0;
        frame_a.input = x;
        frame_b.input = x;
        frame_a.fm_cv = fm;
        frame_b.fm_cv = fm;
        a.process(&mut frame_a);
        b.process(&mut frame_b);
        assert!(a.outputs_finite(&frame_a));
        assert!(frame_a.lp4.abs() <= RIPPLES_SATURATION);
    }
    // Identical input, identical output: there is no hidden global state.
    assert_eq!(frame_a, frame_b);
    assert_eq!(a.cell_voltages(), b.cell_voltages());
}

#[test]
fn shelves_survives_long_noise_run() {
    let mut engine = ShelvesEngine::new(48_000.0);
    let mut frame = ShelvesFrame {
        p2_hp_out_connected: true,
        global_freq_cv_connected: true,
        global_gain_cv_connected: true,
        ..Default::default()
    };
    frame.p1.q_knob = 0.5;
    frame.p1.gain_knob = 1.0;
    frame.p2.q_knob = 0.5;
    frame.p2.gain_knob = -1.0;
    frame.high_shelf.gain_knob = 1.0;
    let mut noise = Xorshift32::new(7);

    let mut pinned = 0;
    for _ in 0..100_000 {
        frame.main_in = (noise.uniform() - 0.5) * 20.0;
        frame.global_freq_cv = (noise.uniform() - 0.5) * 4.0;
        frame.global_gain_cv = (noise.uniform() - 0.5) * 4.0;
        engine.process(&mut frame);
        assert!(engine.outputs_finite(&frame));
        for out in shelves_outputs(&frame) {
            assert!(out.abs() <= SHELVES_SATURATION);
        }
        if frame.main_out.abs() >= SHELVES_SATURATION - 1e-3 {
            pinned += 1;
        }
    }
    assert!(pinned < 100_000, "main output stuck at the rail");

    // Back to silence once the noise stops.
    frame.main_in = 0.0;
    frame.global_freq_cv = 0.0;
    frame.global_gain_cv = 0.0;
    let peak = settled_peak(&mut engine, &mut frame, shelves_outputs);
    assert!(peak.iter().all(|&x| x < 1e-2), "{peak:?}");
}

#[test]
fn streams_survives_long_noise_run() {
    let mut engine: Box<StreamsEngine> = Box::default();
    let mut frame = patched_streams_frame(0.0, 0.0);
    frame.ch2.response_knob = 0.0;
    let mut noise = Xorshift32::new(11);

    let mut pinned = 0;
    for _ in 0..100_000 {
        let x = (noise.uniform() - 0.5) * 20.0;
        let level = noise.uniform() * 10.0;
        frame.ch1.signal_in = x;
        frame.ch2.signal_in = -x;
        frame.ch1.level_cv = level;
        frame.ch2.level_cv = 10.0 - level;
        frame.ch1.excite_in = x;
        engine.process(&mut frame);
        assert!(engine.outputs_finite(&frame));
        for out in streams_outputs(&frame) {
            assert!(out.abs() <= STREAMS_SATURATION);
            if out.abs() >= STREAMS_SATURATION - 1e-3 {
                pinned += 1;
            }
        }
    }
    assert!(pinned < 200_000, "outputs stuck at the rail");

    frame.ch1.signal_in = 0.0;
    frame.ch2.signal_in = 0.0;
    let peak = settled_peak(&mut *engine, &mut frame, streams_outputs);
    assert!(peak.iter().all(|&x| x < 1e-3), "{peak:?}");
}
