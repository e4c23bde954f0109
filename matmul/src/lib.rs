//! Matrix multiplication where one or both operands stay encrypted.
//!
//! Each element is encrypted on its own (constant coefficient of a BFV
//! plaintext). Cell (i, j) of the product is the homomorphic dot product of
//! row i of A and column j of B: one ciphertext multiplication per term and
//! a sum of the partial products. Decrypted cells equal the exact product
//! reduced mod t; [plaintext::check_headroom] tells when that reduction is
//! a no-op.

pub mod error;
pub mod evaluator;
pub mod generate;
pub mod grid;
pub mod pipeline;
pub mod plaintext;
pub mod protocol;
pub mod reduce;

pub use error::{Error, Result};
pub use grid::{CiphertextMatrix, Grid, Matrix, flatten, unflatten};
