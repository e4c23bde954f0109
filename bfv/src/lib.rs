//! Minimal BFV over an RNS ciphertext modulus: coefficient encoding, secret-
//! and public-key encryption, addition and a single level of
//! ciphertext-ciphertext multiplication without relinearization.

pub mod ciphertext;
pub mod decryptor;
pub mod encoder;
pub mod encryptor;
pub mod error;
pub mod evaluator;
pub mod key_generator;
pub mod keys;
pub mod parameters;
pub mod plaintext;

pub use error::{Error, Result};

/// Gaussian samples are rejected beyond SIX_SIGMA standard deviations.
pub const SIX_SIGMA: f64 = 6.0;
