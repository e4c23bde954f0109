use crate::modulus::prime::Prime;
use crate::poly::PolyRNS;
use crate::ring::RingRNS;
use itertools::izip;
use rug::Integer;

/// Precomputed constants for CRT reconstruction over a chain of primes.
pub(crate) struct Crt {
    primes: Vec<Prime>,
    modulus: Integer,
    half: Integer,
    q_hat: Vec<Integer>,
    q_hat_inv: Vec<u64>,
}

impl Crt {
    pub(crate) fn new(primes: &[Prime]) -> Self {
        let mut modulus: Integer = Integer::from(1);
        primes.iter().for_each(|p| modulus *= p.q());

        let q_hat: Vec<Integer> = primes
            .iter()
            .map(|p| modulus.clone() / p.q())
            .collect();

        let q_hat_inv: Vec<u64> = izip!(primes, &q_hat)
            .map(|(p, q_hat)| p.inv(residue(q_hat, p.q())))
            .collect();

        let half: Integer = modulus.clone() >> 1u32;

        Self {
            primes: primes.to_vec(),
            modulus,
            half,
            q_hat,
            q_hat_inv,
        }
    }

    pub(crate) fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Representative in [0, Q) of the coefficient at index j.
    fn reconstruct(&self, a: &PolyRNS, j: usize) -> Integer {
        let mut x: Integer = Integer::new();
        izip!(&self.primes, &self.q_hat, &self.q_hat_inv, &a.0).for_each(
            |(p, q_hat, q_hat_inv, a)| {
                let mut term: Integer = q_hat.clone();
                term *= p.mul(a.0[j], *q_hat_inv);
                x += &term;
            },
        );
        while x >= self.modulus {
            x -= &self.modulus;
        }
        x
    }
}

/// Returns x mod q in [0, q) for any sign of x.
#[inline(always)]
pub fn residue(x: &Integer, q: u64) -> u64 {
    x.clone().div_rem_euc(Integer::from(q)).1.to_u64_wrapping()
}

impl RingRNS {
    /// Residues of x modulo each prime of the chain.
    pub fn residues(&self, x: &Integer) -> Vec<u64> {
        self.rings()
            .iter()
            .map(|r| residue(x, r.modulus.q()))
            .collect()
    }

    /// Writes the coefficients `coeffs` (any sign) into `a`, padding with zeros.
    pub fn from_integers(&self, coeffs: &[Integer], a: &mut PolyRNS) {
        assert!(
            coeffs.len() <= a.n(),
            "invalid coeffs: coeffs.len()={} > a.n()={}",
            coeffs.len(),
            a.n()
        );
        a.zero();
        coeffs.iter().enumerate().for_each(|(j, x)| {
            izip!(self.rings(), a.0.iter_mut()).for_each(|(r, a)| a.0[j] = residue(x, r.modulus.q()))
        });
    }

    /// Coefficients of `a` as integers in [0, Q).
    pub fn to_integers(&self, a: &PolyRNS) -> Vec<Integer> {
        (0..a.n()).map(|j| self.crt.reconstruct(a, j)).collect()
    }

    /// Coefficients of `a` as integers in (-Q/2, Q/2].
    pub fn to_integers_centered(&self, a: &PolyRNS) -> Vec<Integer> {
        (0..a.n())
            .map(|j| {
                let mut x: Integer = self.crt.reconstruct(a, j);
                if x > self.crt.half {
                    x -= &self.crt.modulus;
                }
                x
            })
            .collect()
    }
}
