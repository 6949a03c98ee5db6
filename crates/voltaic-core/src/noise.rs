//! Deterministic uniform noise for dither.

/// Seed used by [`Xorshift32::default`] and in place of a zero seed.
pub const DEFAULT_SEED: u32 = 0x9E37_79B9;

/// 32-bit xorshift generator.
///
/// Reseeding on reset keeps engine output bit-identical after a
/// reconfiguration.
#[derive(Debug, Clone, Copy)]
pub struct Xorshift32 {
    seed: u32,
    state: u32,
}

impl Xorshift32 {
    /// Generator seeded with `seed` (zero is replaced by [`DEFAULT_SEED`]).
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { seed, state: seed }
    }

    /// Next raw 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Restart the sequence from the construction seed.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut rng = Xorshift32::default();
        let mut sum = 0.0_f64;
        for _ in 0..100_000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
            sum += f64::from(u);
        }
        let mean = sum / 100_000.0;
        assert!((mean - 0.5).abs() < 0.01, "mean {mean}");
    }

    #[test]
    fn reset_replays_sequence() {
        let mut rng = Xorshift32::default();
        let a: [u32; 8] = core::array::from_fn(|_| rng.next_u32());
        rng.reset();
        let b: [u32; 8] = core::array::from_fn(|_| rng.next_u32());
        assert_eq!(a, b);
    }

    #[test]
    fn reset_keeps_a_custom_seed() {
        let mut rng = Xorshift32::new(12_345);
        let a: [u32; 8] = core::array::from_fn(|_| rng.next_u32());
        rng.reset();
        let b: [u32; 8] = core::array::from_fn(|_| rng.next_u32());
        assert_eq!(a, b);

        let mut other = Xorshift32::default();
        assert_ne!(a[0], other.next_u32());
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }
}
