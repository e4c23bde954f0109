use crate::error::Result;
use crate::grid::{CiphertextMatrix, Matrix};
use bfv::ciphertext::Ciphertext;
use bfv::decryptor::Decryptor;
use bfv::encoder::Encoder;
use bfv::encryptor::Encryptor;

/// Coefficient holding the matrix element in each plaintext.
pub const SLOT: usize = 0;

/// Encrypts every element as its own ciphertext, the element sitting in
/// [SLOT] and every other coefficient zero.
pub fn encrypt_matrix(m: &Matrix, encoder: &Encoder, encryptor: &mut Encryptor) -> Result<CiphertextMatrix> {
    m.try_map(|x| -> Result<Ciphertext> { Ok(encryptor.encrypt(&encoder.encode(&[*x])?)?) })
}

pub fn decrypt_matrix(c: &CiphertextMatrix, encoder: &Encoder, decryptor: &Decryptor) -> Result<Matrix> {
    c.try_map(|ct| -> Result<u64> { Ok(encoder.decode(&decryptor.decrypt(ct)?)[SLOT]) })
}
