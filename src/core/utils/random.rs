/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seeded generator for initial jitter, particle placement and release spin.
///
/// Deterministic for a given seed so tests can pin exact sequences.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // Xorshift never leaves the all-zero state.
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    /// Uniform sample in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform sample in [0, max)
    #[inline]
    pub fn range(&mut self, max: f32) -> f32 {
        self.next_f32() * max
    }

    /// Symmetric sample in [-spread/2, spread/2)
    #[inline]
    pub fn jitter(&mut self, spread: f32) -> f32 {
        (self.next_f32() - 0.5) * spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn jitter_is_symmetric_around_zero() {
        let mut rng = Rng::new(99);
        for _ in 0..1_000 {
            let v = rng.jitter(2.0);
            assert!(v >= -1.0 && v < 1.0);
        }
    }

    #[test]
    fn zero_seed_still_produces_values() {
        let mut rng = Rng::new(0);
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert_ne!(a, b);
    }
}
