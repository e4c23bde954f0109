use crate::modulus::prime::{MAX_PRIME_BITS, Prime, is_prime};

/// Enumerates primes q ≡ 1 mod nth_root of exactly `bit_size` bits, from the
/// largest one downwards.
pub struct NTTFriendlyPrimesGenerator {
    bit_size: usize,
    nth_root: u64,
    prev_prime: u64,
    floor: u64,
}

impl NTTFriendlyPrimesGenerator {
    pub fn new(bit_size: usize, nth_root: u64) -> Self {
        assert!(
            (2..=MAX_PRIME_BITS).contains(&bit_size),
            "invalid argument bit_size: bit_size = {} not in [2, {}]",
            bit_size,
            MAX_PRIME_BITS
        );
        assert!(
            nth_root.is_power_of_two(),
            "invalid argument nth_root: nth_root = {} is not a power of two",
            nth_root
        );
        let top: u64 = (1 << bit_size) + 1;
        Self {
            bit_size,
            nth_root,
            prev_prime: top.saturating_sub(nth_root),
            floor: 1 << (bit_size - 1),
        }
    }

    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Returns the next prime below the previous one, or None once the
    /// candidates would drop under `2^(bit_size-1)`.
    pub fn next_downstream_prime(&mut self) -> Option<Prime> {
        while self.prev_prime > self.floor {
            let candidate: u64 = self.prev_prime;
            self.prev_prime = self.prev_prime.saturating_sub(self.nth_root);
            if is_prime(candidate) {
                return Some(Prime::new_unchecked(candidate));
            }
        }
        None
    }

    pub fn next_downstream_primes(&mut self, k: usize) -> Option<Vec<Prime>> {
        (0..k).map(|_| self.next_downstream_prime()).collect()
    }
}
