pub mod crt;
pub mod ops;
pub mod sampling;

use crate::dft::ntt::Table;
use crate::modulus::WordOps;
use crate::modulus::prime::Prime;
use crate::poly::{Poly, PolyRNS};
use crate::ring::crt::Crt;
use rug::Integer;

/// Z_q[X]/(X^n+1) for a single NTT-friendly prime q.
pub struct Ring {
    pub n: usize,
    pub modulus: Prime,
    pub dft: Table,
}

impl Ring {
    pub fn new(n: usize, modulus: Prime) -> Self {
        assert!(
            n.is_power_of_two() && n >= 2,
            "invalid argument n: n = {} is not a power of two >= 2",
            n
        );
        assert!(
            modulus.q() % (2 * n as u64) == 1,
            "invalid argument modulus: q = {} is not 1 mod 2n = {}",
            modulus.q(),
            2 * n
        );
        Self {
            n,
            modulus,
            dft: Table::new(modulus, (2 * n) as u64),
        }
    }

    pub fn log_n(&self) -> usize {
        self.n().log2()
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn new_poly(&self) -> Poly {
        Poly::new(self.n())
    }
}

/// Z_Q[X]/(X^n+1) with Q the product of pairwise distinct primes, each
/// residue handled by its own [Ring].
pub struct RingRNS {
    rings: Vec<Ring>,
    crt: Crt,
}

impl RingRNS {
    pub fn new(n: usize, primes: &[Prime]) -> Self {
        assert!(!primes.is_empty(), "invalid argument primes: empty modulus chain");
        Self {
            rings: primes.iter().map(|p| Ring::new(n, *p)).collect(),
            crt: Crt::new(primes),
        }
    }

    pub fn log_n(&self) -> usize {
        self.n().log2()
    }

    pub fn n(&self) -> usize {
        self.rings[0].n()
    }

    pub fn level(&self) -> usize {
        self.rings.len() - 1
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn at(&self, level: usize) -> &Ring {
        &self.rings[level]
    }

    /// Product of all primes of the chain.
    pub fn modulus(&self) -> &Integer {
        self.crt.modulus()
    }

    pub fn new_polyrns(&self) -> PolyRNS {
        PolyRNS::new(self.n(), self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulus::prime_generation::NTTFriendlyPrimesGenerator;

    #[test]
    fn ring_rns_modulus_is_product() {
        let n: usize = 16;
        let primes: Vec<Prime> = NTTFriendlyPrimesGenerator::new(50, 2 * n as u64)
            .next_downstream_primes(3)
            .unwrap();
        let ring: RingRNS = RingRNS::new(n, &primes);
        let mut want: Integer = Integer::from(1);
        primes.iter().for_each(|p| want *= p.q());
        assert_eq!(ring.modulus(), &want);
        assert_eq!(ring.level(), 2);
        assert_eq!(ring.log_n(), 4);
    }

    #[test]
    #[should_panic]
    fn ring_rejects_non_ntt_friendly_prime() {
        // 65537 - 1 = 2^16, so n = 2^16 would need 2^17 | q-1.
        Ring::new(1 << 16, Prime::new(65537));
    }
}
