//! Integration tests for voltaic-core.
//!
//! Exercises the oversampling chain end to end: zero-stuffed interpolation,
//! a core running at the oversampled rate, and decimation.

use std::f32::consts::PI;
use voltaic_core::{
    AaFilter, AaFilterPair, AaProfile, F32x4, FilterRole, InterpolatingResampler, SampleFrame,
    SupportedRate,
};

fn generate_sine(freq: f32, sample_rate: f32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (2.0 * PI * freq * i as f32 / sample_rate).sin())
        .collect()
}

fn rms(signal: &[f32]) -> f32 {
    (signal.iter().map(|x| x * x).sum::<f32>() / signal.len() as f32).sqrt()
}

fn to_db(gain: f32) -> f32 {
    20.0 * gain.log10()
}

/// Run `input` through up → identity core → down at `sample_rate`.
fn oversample_round_trip(profile: AaProfile, sample_rate: f32, input: &[f32]) -> Vec<f32> {
    let mut up: AaFilter<f32> = AaFilter::new(profile, FilterRole::Upsampling);
    let mut down: AaFilter<f32> = AaFilter::new(profile, FilterRole::Downsampling);
    let factor = up.init(sample_rate);
    down.init(sample_rate);
    input
        .iter()
        .map(|&x| {
            let mut out = 0.0;
            for i in 0..factor {
                let stuffed = if i == 0 { x * factor as f32 } else { 0.0 };
                out = down.process(up.process(stuffed));
            }
            out
        })
        .collect()
}

#[test]
fn passband_is_flat_through_oversampling() {
    for profile in [AaProfile::Ladder, AaProfile::Equalizer, AaProfile::Dynamics] {
        for rate in [SupportedRate::Hz44100, SupportedRate::Hz48000, SupportedRate::Hz96000] {
            let sr = rate.hz() as f32;
            let input = generate_sine(1_000.0, sr, sr as usize / 4);
            let output = oversample_round_trip(profile, sr, &input);
            let settle = output.len() / 2;
            let gain_db = to_db(rms(&output[settle..]) / rms(&input[settle..]));
            assert!(
                gain_db.abs() < 0.5,
                "{profile:?} at {sr} Hz: 1 kHz gain {gain_db:.2} dB"
            );
        }
    }
}

#[test]
fn decimation_rejects_content_above_host_nyquist() {
    // At 48 kHz the core runs at 144 kHz; 60 kHz would alias to 12 kHz.
    let mut down: AaFilter<f32> = AaFilter::new(AaProfile::Ladder, FilterRole::Downsampling);
    let factor = down.init(48_000.0);
    assert_eq!(factor, 3);
    let core_rate = 48_000.0 * factor as f32;
    let tone = generate_sine(60_000.0, core_rate, 48_000);
    let out: Vec<f32> = tone.iter().map(|&x| down.process(x)).collect();
    let gain_db = to_db(rms(&out[24_000..]) / rms(&tone[24_000..]));
    assert!(gain_db < -80.0, "60 kHz leaks at {gain_db:.1} dB");
}

#[test]
fn four_lanes_match_scalar_path() {
    let mut lanes: AaFilterPair<F32x4> = AaFilterPair::new(AaProfile::Ladder);
    let mut scalar: AaFilterPair<f32> = AaFilterPair::new(AaProfile::Ladder);
    lanes.init(44_100.0);
    scalar.init(44_100.0);
    let input = generate_sine(440.0, 44_100.0, 512);
    for &x in &input {
        let up = lanes.process_up(F32x4::new(x, 0.0, -x, x));
        let v = lanes.process_down(up);
        let up = scalar.process_up(x);
        let s = scalar.process_down(up);
        assert_eq!(v[0], s);
        assert_eq!(v[1], 0.0);
        assert_eq!(v[2], -s);
        assert_eq!(v[3], s);
    }
}

#[test]
fn resampler_block_processor_sees_inner_rate_tone() {
    // A 1 kHz host tone arrives at the 31089 Hz processor as 1 kHz.
    let host_rate = 48_000.0;
    let inner_rate = 31_089.0;
    let mut r: InterpolatingResampler<1, 1, 16, 256> =
        InterpolatingResampler::new(host_rate, inner_rate);
    let mut seen = Vec::new();
    for x in generate_sine(1_000.0, host_rate, 48_000) {
        r.process(
            SampleFrame::new([x]),
            |i: &[SampleFrame<1>], o: &mut [SampleFrame<1>]| {
                seen.extend(i.iter().map(|f| f.samples[0]));
                o.copy_from_slice(i);
            },
        );
    }
    let crossings = seen
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count();
    assert!((995..=1000).contains(&crossings), "{crossings} cycles");
    let samples_per_cycle = seen.len() as f32 / crossings as f32;
    assert!((samples_per_cycle - inner_rate / 1_000.0).abs() < 0.5);
}
