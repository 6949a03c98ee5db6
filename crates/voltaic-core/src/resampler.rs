//! Host-rate adapters for block-based processors running at their own rate.
//!
//! Some algorithms only run at a fixed native rate and in fixed-size blocks.
//! The resamplers here sit between the per-sample host callback and such a
//! block processor: every host tick pushes one input frame and pops one
//! output frame, while the processor is invoked with whole blocks at its own
//! rate.
//!
//! Both resamplers take the processor as a closure
//! `FnMut(&[SampleFrame<IN>], &mut [SampleFrame<OUT>])` that must fill the
//! whole output block.
//!
//! - [`BlockResampler`] converts through a pair of [`SampleRateConverter`]s
//!   and runs a block whenever its output buffer runs dry
//! - [`InterpolatingResampler`] crossfades linearly between neighboring
//!   frames and primes its output with one block of latency

use crate::converter::SampleRateConverter;
use crate::frame::SampleFrame;
use crate::ring::DoubleRingBuffer;

/// Resampler driven by the output side.
///
/// # Contract
///
/// - The host frame is dropped if the input buffer is full
/// - When the output buffer is empty, buffered input is converted into one
///   native block (zero-padded if short), the processor runs, and its output
///   is converted back into the output buffer
/// - One output frame is returned per call, or silence when none is ready
#[derive(Debug, Clone)]
pub struct BlockResampler<
    const IN: usize,
    const OUT: usize,
    const BLOCK: usize,
    const BUF: usize,
> {
    input_src: SampleRateConverter<IN>,
    output_src: SampleRateConverter<OUT>,
    input_buffer: DoubleRingBuffer<SampleFrame<IN>, BUF>,
    output_buffer: DoubleRingBuffer<SampleFrame<OUT>, BUF>,
}

impl<const IN: usize, const OUT: usize, const BLOCK: usize, const BUF: usize>
    BlockResampler<IN, OUT, BLOCK, BUF>
{
    /// Resampler between a host (`outer_rate`) and a processor (`inner_rate`).
    pub fn new(outer_rate: f32, inner_rate: f32) -> Self {
        Self {
            input_src: SampleRateConverter::new(outer_rate, inner_rate),
            output_src: SampleRateConverter::new(inner_rate, outer_rate),
            input_buffer: DoubleRingBuffer::new(),
            output_buffer: DoubleRingBuffer::new(),
        }
    }

    /// Change rates and clear all buffers.
    pub fn init(&mut self, outer_rate: f32, inner_rate: f32) {
        self.input_src.set_rates(outer_rate, inner_rate);
        self.output_src.set_rates(inner_rate, outer_rate);
        self.reset();
    }

    /// Clear buffers and converter history.
    pub fn reset(&mut self) {
        self.input_src.reset();
        self.output_src.reset();
        self.input_buffer.clear();
        self.output_buffer.clear();
    }

    /// Push one host frame and return one host frame.
    pub fn process<F>(&mut self, input: SampleFrame<IN>, mut block: F) -> SampleFrame<OUT>
    where
        F: FnMut(&[SampleFrame<IN>], &mut [SampleFrame<OUT>]),
    {
        self.input_buffer.push(input);

        if self.output_buffer.is_empty() {
            let mut native_in = [SampleFrame::SILENCE; BLOCK];
            let (consumed, _) = self
                .input_src
                .process(self.input_buffer.start_data(), &mut native_in);
            self.input_buffer.start_incr(consumed);

            let mut native_out = [SampleFrame::SILENCE; BLOCK];
            block(&native_in, &mut native_out);

            let (_, produced) = self
                .output_src
                .process(&native_out, self.output_buffer.end_data_mut());
            self.output_buffer.end_incr(produced);
        }

        self.output_buffer.shift_or(SampleFrame::SILENCE)
    }
}

/// Linear-crossfade resampler with one block of latency.
///
/// Input frames are interpolated at the processor's rate into an input ring;
/// every full block is processed into the output ring, and each host tick
/// pops as many processed frames as it pushed and crossfades between the
/// last two.
#[derive(Debug, Clone)]
pub struct InterpolatingResampler<
    const IN: usize,
    const OUT: usize,
    const BLOCK: usize,
    const BUF: usize,
> {
    ratio: f32,
    ratio_inverse: f32,
    in_buffer: DoubleRingBuffer<SampleFrame<IN>, BUF>,
    out_buffer: DoubleRingBuffer<SampleFrame<OUT>, BUF>,
    in_phase: f32,
    prev_input: SampleFrame<IN>,
    prev_output: SampleFrame<OUT>,
    next_output: SampleFrame<OUT>,
}

impl<const IN: usize, const OUT: usize, const BLOCK: usize, const BUF: usize>
    InterpolatingResampler<IN, OUT, BLOCK, BUF>
{
    /// Resampler between a host (`outer_rate`) and a processor (`inner_rate`).
    pub fn new(outer_rate: f32, inner_rate: f32) -> Self {
        const { assert!(BLOCK > 0 && BLOCK <= BUF, "block must fit in the buffer") };
        let mut r = Self {
            ratio: 1.0,
            ratio_inverse: 1.0,
            in_buffer: DoubleRingBuffer::new(),
            out_buffer: DoubleRingBuffer::new(),
            in_phase: 1.0,
            prev_input: SampleFrame::SILENCE,
            prev_output: SampleFrame::SILENCE,
            next_output: SampleFrame::SILENCE,
        };
        r.init(outer_rate, inner_rate);
        r
    }

    /// Change rates and reset.
    ///
    /// A ratio that is not finite and positive (a zero, negative or NaN
    /// rate) falls back to 1 so that every call still advances.
    pub fn init(&mut self, outer_rate: f32, inner_rate: f32) {
        let ratio = inner_rate / outer_rate;
        self.ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
        self.ratio_inverse = 1.0 / self.ratio;
        self.reset();
    }

    /// Processor frames per host frame.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Clear buffers and prime the output with one silent block.
    pub fn reset(&mut self) {
        self.in_buffer.clear();
        self.out_buffer.clear();
        self.out_buffer.end_data_mut()[..BLOCK].fill(SampleFrame::SILENCE);
        self.out_buffer.end_incr(BLOCK);
        self.in_phase = 1.0;
        self.prev_input = SampleFrame::SILENCE;
        self.prev_output = SampleFrame::SILENCE;
        self.next_output = SampleFrame::SILENCE;
    }

    /// Push one host frame and return one host frame.
    pub fn process<F>(&mut self, input: SampleFrame<IN>, mut block: F) -> SampleFrame<OUT>
    where
        F: FnMut(&[SampleFrame<IN>], &mut [SampleFrame<OUT>]),
    {
        let before = self.in_buffer.size();
        let mut steps = 0;
        while self.in_phase <= 1.0 {
            if steps == BUF {
                // Everything past a full buffer would be dropped anyway.
                let skipped = libm::ceilf((1.0 - self.in_phase) * self.ratio).max(1.0);
                self.in_phase += skipped * self.ratio_inverse;
                break;
            }
            self.in_buffer
                .push(SampleFrame::crossfade(&self.prev_input, &input, self.in_phase));
            self.in_phase += self.ratio_inverse;
            steps += 1;
        }
        self.in_phase -= 1.0;
        self.prev_input = input;
        let pushed = self.in_buffer.size() - before;

        while self.in_buffer.size() >= BLOCK && self.out_buffer.capacity() >= BLOCK {
            block(
                &self.in_buffer.start_data()[..BLOCK],
                &mut self.out_buffer.end_data_mut()[..BLOCK],
            );
            self.in_buffer.start_incr(BLOCK);
            self.out_buffer.end_incr(BLOCK);
        }

        let phase = (1.0 - self.in_phase * self.ratio).clamp(0.0, 1.0);
        for _ in 0..pushed {
            self.prev_output = self.next_output;
            self.next_output = self.out_buffer.shift_or(SampleFrame::SILENCE);
        }

        SampleFrame::crossfade(&self.prev_output, &self.next_output, phase)
    }
}
