use math::poly::PolyRNS;

/// Ternary secret s, in coefficient form over R_Q.
pub struct SecretKey {
    pub(crate) value: PolyRNS,
}

/// Encryption of zero under the secret key: (-(a*s) + e, a).
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) value: [PolyRNS; 2],
}

impl PublicKey {
    pub fn at(&self, i: usize) -> &PolyRNS {
        &self.value[i]
    }
}
