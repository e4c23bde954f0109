use crate::modulus::ReduceOnce;
use rug::Integer;
use rug::integer::IsPrime;

/// Largest supported modulus bit size: `2q` must fit in a u64 and Shoup
/// products need `q < 2^63`.
pub const MAX_PRIME_BITS: usize = 61;

/// Prime modulus q with scalar arithmetic in [0, q).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prime {
    q: u64,
}

/// Miller-Rabin test backed by GMP.
pub fn is_prime(q: u64) -> bool {
    Integer::from(q).is_probably_prime(32) != IsPrime::No
}

impl Prime {
    /// Returns a new instance of [Prime].
    /// Panics if q is not a prime > 2 or has more than [MAX_PRIME_BITS] bits.
    pub fn new(q: u64) -> Self {
        assert!(is_prime(q) && q > 2, "invalid argument q: q = {} is not an odd prime", q);
        Self::new_unchecked(q)
    }

    /// Returns a new instance of [Prime] without checking primality.
    pub fn new_unchecked(q: u64) -> Self {
        assert!(
            q < 1 << MAX_PRIME_BITS,
            "invalid argument q: q = {} exceeds {} bits",
            q,
            MAX_PRIME_BITS
        );
        Self { q }
    }

    #[inline(always)]
    pub fn q(&self) -> u64 {
        self.q
    }

    #[inline(always)]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        (a + b).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        (a + self.q - b).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn neg(&self, a: u64) -> u64 {
        if a == 0 { 0 } else { self.q - a }
    }

    #[inline(always)]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.q as u128) as u64
    }

    /// Maps a signed value to its representative in [0, q).
    #[inline(always)]
    pub fn reduce_i64(&self, x: i64) -> u64 {
        let r: u64 = x.unsigned_abs() % self.q;
        if x < 0 { self.neg(r) } else { r }
    }

    /// Returns x^exponent mod q.
    pub fn pow(&self, x: u64, exponent: u64) -> u64 {
        let mut y: u64 = 1;
        let mut x: u64 = x % self.q;
        let mut i: u64 = exponent;
        while i > 0 {
            if i & 1 == 1 {
                y = self.mul(y, x);
            }
            x = self.mul(x, x);
            i >>= 1;
        }
        y
    }

    /// Returns x^-1 mod q.
    pub fn inv(&self, x: u64) -> u64 {
        assert!(x % self.q != 0, "invalid argument x: {} is not invertible mod {}", x, self.q);
        self.pow(x, self.q - 2)
    }

    /// Returns a primitive nth_root-th root of unity mod q, where nth_root is
    /// a power of two dividing q-1. The root is derived from the smallest
    /// candidate generator, so it is deterministic for a given q.
    pub fn primitive_nth_root(&self, nth_root: u64) -> u64 {
        assert!(
            nth_root.is_power_of_two() && nth_root >= 2,
            "invalid argument nth_root: nth_root = {} is not a power of two",
            nth_root
        );
        assert!(
            (self.q - 1) % nth_root == 0,
            "invalid argument nth_root: nth_root = {} does not divide q-1 = {}",
            nth_root,
            self.q - 1
        );

        let cofactor: u64 = (self.q - 1) / nth_root;
        // psi is primitive iff psi^(nth_root/2) = -1.
        (2..self.q)
            .map(|g| self.pow(g, cofactor))
            .find(|psi| self.pow(*psi, nth_root >> 1) == self.q - 1)
            .unwrap_or_else(|| panic!("failed to find a primitive {}-th root mod {}", nth_root, self.q))
    }
}
