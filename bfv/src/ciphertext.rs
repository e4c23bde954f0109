use math::poly::PolyRNS;

/// BFV ciphertext (c_0, ..., c_d) over R_Q, decrypting as sum_i c_i * s^i.
///
/// Fresh encryptions have degree 1; the product of two of them has degree 2.
/// Ciphertexts are never modified once produced: every evaluation returns a
/// new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) value: Vec<PolyRNS>,
}

impl Ciphertext {
    pub fn degree(&self) -> usize {
        self.value.len() - 1
    }

    pub fn at(&self, i: usize) -> &PolyRNS {
        &self.value[i]
    }

    pub fn value(&self) -> &[PolyRNS] {
        &self.value
    }
}
