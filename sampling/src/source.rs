use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::{OsRng, RngCore, TryRngCore};

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic, seedable stream of randomness.
///
/// Every consumer of randomness in the workspace (fixtures, key generation,
/// encryption noise) takes a `&mut Source` so that runs can be replayed from
/// a seed.
pub struct Source {
    source: ChaCha8Rng,
}

/// Draws a fresh 32-byte seed from the operating system.
pub fn new_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    OsRng.unwrap_err().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    /// Returns an independent [Source] seeded from this one.
    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Rejection-samples a value in [0, max) from masked 64-bit draws.
    /// `mask` must cover `max - 1`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Uniform value in [0, bound).
    pub fn next_u64_below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "invalid argument bound: bound = 0");
        let mask: u64 = u64::MAX.checked_shr((bound - 1).leading_zeros()).unwrap_or(0);
        self.next_u64n(bound, mask)
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Samples from {-1, 0, 1} with P(-1) = P(1) = prob / 2.
    #[inline(always)]
    pub fn next_ternary(&mut self, prob: f64) -> i64 {
        let x: f64 = self.next_f64(0.0, 1.0);
        if x < prob / 2.0 {
            -1
        } else if x < prob {
            1
        } else {
            0
        }
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::Source;

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([7u8; 32]);
        let mut b: Source = Source::new([7u8; 32]);
        (0..64).for_each(|_| assert_eq!(a.next_u64_below(1000), b.next_u64_below(1000)));
    }

    #[test]
    fn branch_diverges_from_parent() {
        let mut parent: Source = Source::new([0u8; 32]);
        let mut child: Source = parent.branch();
        let xs: Vec<u64> = (0..8).map(|_| parent.next_u64_below(u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| child.next_u64_below(u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn next_u64_below_respects_bound() {
        let mut source: Source = Source::new([0u8; 32]);
        [1u64, 2, 3, 100, 65537, 1 << 63, u64::MAX].iter().for_each(|&bound| {
            (0..256).for_each(|_| assert!(source.next_u64_below(bound) < bound));
        });
    }

    #[test]
    fn ternary_density() {
        let mut source: Source = Source::new([0u8; 32]);
        let n: usize = 1 << 14;
        let mut counts: [usize; 3] = [0; 3];
        (0..n).for_each(|_| counts[(source.next_ternary(0.5) + 1) as usize] += 1);
        let nonzero: f64 = (counts[0] + counts[2]) as f64 / n as f64;
        assert!((nonzero - 0.5).abs() < 0.05, "nonzero ratio {}", nonzero);
        assert_eq!(counts.iter().sum::<usize>(), n);
    }
}
