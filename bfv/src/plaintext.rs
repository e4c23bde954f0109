/// Polynomial with coefficients in [0, t).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plaintext {
    pub(crate) value: Vec<u64>,
}

impl Plaintext {
    pub fn n(&self) -> usize {
        self.value.len()
    }

    pub fn value(&self) -> &[u64] {
        &self.value
    }
}
