//! WAV output.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Write interleaved 32-bit float samples to a WAV file.
pub fn write_wav_f32<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    channels: u16,
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;
    use tempfile::TempDir;

    #[test]
    fn writes_float_multichannel() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.wav");
        let samples = [0.5, -0.5, 1.5, -1.5, 0.0, 10.0];
        write_wav_f32(&path, &samples, 3, 44_100).unwrap();

        let reader = WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 3);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.sample_format, SampleFormat::Float);
        let read: Vec<f32> = reader.into_samples::<f32>().map(Result::unwrap).collect();
        assert_eq!(read, samples);
    }
}
