use crate::SIX_SIGMA;
use crate::error::{Error, Result};
use math::modulus::prime::{MAX_PRIME_BITS, Prime};
use math::modulus::prime_generation::NTTFriendlyPrimesGenerator;
use math::ring::RingRNS;
use rand_distr::Normal;
use rug::Integer;
use std::collections::HashMap;

/// Bit size of the primes of the auxiliary basis used by the tensor product.
const AUX_PRIME_BITS: usize = MAX_PRIME_BITS;

pub struct ParametersLiteral {
    /// log2 of the ring degree n.
    pub log_n: usize,
    /// Bit size of each prime of the ciphertext modulus chain.
    pub log_q: &'static [usize],
    /// Plaintext modulus.
    pub t: u64,
    /// Standard deviation of the error distribution.
    pub xe: f64,
    /// Probability of a nonzero secret coefficient.
    pub xs: f64,
}

impl ParametersLiteral {
    pub const SMALL: ParametersLiteral = ParametersLiteral {
        log_n: 10,
        log_q: &[60, 60],
        t: 0x3ee0001,
        xe: 3.2,
        xs: 0.5,
    };

    pub const MEDIUM: ParametersLiteral = ParametersLiteral {
        log_n: 12,
        log_q: &[60, 60, 60],
        t: 0x3ee0001,
        xe: 3.2,
        xs: 0.5,
    };
}

pub struct Parameters {
    log_n: usize,
    t: u64,
    xe: f64,
    xs: f64,
    ring_q: RingRNS,
    ring_p: RingRNS,
    /// floor(Q/t) mod q_i.
    delta: Vec<u64>,
    xe_dist: Normal<f64>,
}

impl Parameters {
    pub fn new(p: &ParametersLiteral) -> Result<Self> {
        if !(1..=16).contains(&p.log_n) {
            return Err(Error::InvalidRingDegree(p.log_n));
        }
        if p.t < 2 {
            return Err(Error::InvalidPlaintextModulus(p.t));
        }
        if p.log_q.is_empty() {
            return Err(Error::EmptyModulusChain);
        }
        if let Some(bits) = p.log_q.iter().find(|b| !(2..=MAX_PRIME_BITS).contains(*b)) {
            return Err(Error::InvalidModulusSize { bits: *bits });
        }
        if !(p.xe.is_finite() && p.xe > 0.0) {
            return Err(Error::InvalidSigma(p.xe));
        }
        if !(p.xs > 0.0 && p.xs <= 1.0) {
            return Err(Error::InvalidSecretDensity(p.xs));
        }

        let n: usize = 1 << p.log_n;
        let nth_root: u64 = 2 * n as u64;

        let mut generators: HashMap<usize, NTTFriendlyPrimesGenerator> = HashMap::new();
        let primes_q: Vec<Prime> = p
            .log_q
            .iter()
            .map(|bits| {
                generators
                    .entry(*bits)
                    .or_insert_with(|| NTTFriendlyPrimesGenerator::new(*bits, nth_root))
                    .next_downstream_prime()
                    .ok_or(Error::PrimesExhausted { bits: *bits, nth_root })
            })
            .collect::<Result<Vec<Prime>>>()?;

        let ring_q: RingRNS = RingRNS::new(n, &primes_q);
        let q: &Integer = ring_q.modulus();
        let log_q: usize = q.significant_bits() as usize;

        if Integer::from(p.t) << 1u32 >= *q {
            return Err(Error::PlaintextModulusTooLarge { t: p.t, log_q });
        }

        // |c_i * c_j| summed over a tensor coefficient stays below n * Q^2 / 2.
        let log_p: usize = 2 * log_q + p.log_n + 4;
        let aux_generator: &mut NTTFriendlyPrimesGenerator = generators
            .entry(AUX_PRIME_BITS)
            .or_insert_with(|| NTTFriendlyPrimesGenerator::new(AUX_PRIME_BITS, nth_root));
        let mut primes_p: Vec<Prime> = Vec::new();
        let mut modulus_p: Integer = Integer::from(1);
        while (modulus_p.significant_bits() as usize) <= log_p {
            let prime: Prime = aux_generator.next_downstream_prime().ok_or(Error::PrimesExhausted {
                bits: AUX_PRIME_BITS,
                nth_root,
            })?;
            modulus_p *= prime.q();
            primes_p.push(prime);
        }
        let ring_p: RingRNS = RingRNS::new(n, &primes_p);

        let delta_int: Integer = q.clone() / p.t;
        let delta: Vec<u64> = ring_q.residues(&delta_int);

        let xe_dist: Normal<f64> = Normal::new(0.0, p.xe).map_err(|_| Error::InvalidSigma(p.xe))?;

        Ok(Self {
            log_n: p.log_n,
            t: p.t,
            xe: p.xe,
            xs: p.xs,
            ring_q,
            ring_p,
            delta,
            xe_dist,
        })
    }

    pub fn n(&self) -> usize {
        1 << self.log_n
    }

    pub fn log_n(&self) -> usize {
        self.log_n
    }

    pub fn t(&self) -> u64 {
        self.t
    }

    /// Ciphertext modulus Q.
    pub fn q(&self) -> &Integer {
        self.ring_q.modulus()
    }

    pub fn log_q(&self) -> usize {
        self.q().significant_bits() as usize
    }

    /// Auxiliary modulus P used by the tensor product.
    pub fn p(&self) -> &Integer {
        self.ring_p.modulus()
    }

    pub fn xe(&self) -> f64 {
        self.xe
    }

    pub fn xs(&self) -> f64 {
        self.xs
    }

    pub fn ring_q(&self) -> &RingRNS {
        &self.ring_q
    }

    pub fn ring_p(&self) -> &RingRNS {
        &self.ring_p
    }

    pub fn delta(&self) -> &[u64] {
        &self.delta
    }

    pub fn xe_dist(&self) -> &Normal<f64> {
        &self.xe_dist
    }

    pub fn xe_bound(&self) -> f64 {
        SIX_SIGMA * self.xe
    }
}
