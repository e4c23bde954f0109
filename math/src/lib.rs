//! Arithmetic over Z_q[X]/(X^N + 1) for NTT-friendly primes q, and over RNS
//! products of such primes.
//!
//! Polynomials are plain coefficient vectors ([poly::Poly]); a [ring::Ring]
//! owns the modulus and the precomputed NTT tables, and a [ring::RingRNS]
//! chains several rings and converts between residues and big integers.

pub mod dft;
pub mod modulus;
pub mod poly;
pub mod ring;
