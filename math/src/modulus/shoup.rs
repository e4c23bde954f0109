use crate::modulus::ReduceOnce;
use crate::modulus::prime::Prime;

/// Multiplicand `w` paired with its Shoup quotient `floor(w * 2^64 / q)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shoup(pub u64, pub u64);

impl Shoup {
    #[inline(always)]
    pub fn value(&self) -> &u64 {
        &self.0
    }

    #[inline(always)]
    pub fn quotient(&self) -> &u64 {
        &self.1
    }
}

impl Prime {
    #[inline(always)]
    pub fn prepare_shoup(&self, w: u64) -> Shoup {
        debug_assert!(w < self.q());
        let quotient: u64 = (((w as u128) << 64) / self.q() as u128) as _;
        Shoup(w, quotient)
    }

    /// Returns `w * a mod q` in [0, 2q) without reduction.
    #[inline(always)]
    pub fn mul_shoup_lazy(&self, w: Shoup, a: u64) -> u64 {
        let t: u64 = ((*w.quotient() as u128 * a as u128) >> 64) as _;
        a.wrapping_mul(*w.value()).wrapping_sub(self.q().wrapping_mul(t))
    }

    /// Returns `w * a mod q` in [0, q).
    #[inline(always)]
    pub fn mul_shoup(&self, w: Shoup, a: u64) -> u64 {
        self.mul_shoup_lazy(w, a).reduce_once(self.q())
    }
}
