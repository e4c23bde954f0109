use crate::error::{Error, Result};
use crate::parameters::Parameters;
use crate::plaintext::Plaintext;
use std::sync::Arc;

/// Coefficient encoder: the i-th value becomes the coefficient of X^i.
pub struct Encoder {
    params: Arc<Parameters>,
}

impl Encoder {
    pub fn new(params: &Arc<Parameters>) -> Self {
        Self {
            params: params.clone(),
        }
    }

    /// Encodes up to n values in [0, t); missing coefficients are zero.
    pub fn encode(&self, values: &[u64]) -> Result<Plaintext> {
        let n: usize = self.params.n();
        let t: u64 = self.params.t();
        if values.len() > n {
            return Err(Error::TooManyValues { len: values.len(), n });
        }
        if let Some(value) = values.iter().find(|v| **v >= t) {
            return Err(Error::ValueOutOfRange { value: *value, t });
        }
        let mut value: Vec<u64> = vec![0; n];
        value[..values.len()].copy_from_slice(values);
        Ok(Plaintext { value })
    }

    pub fn decode(&self, pt: &Plaintext) -> Vec<u64> {
        pt.value().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::Encoder;
    use crate::error::Error;
    use crate::parameters::{Parameters, ParametersLiteral};
    use crate::plaintext::Plaintext;
    use std::sync::Arc;

    #[test]
    fn encode_decode() {
        let params: Arc<Parameters> = Arc::new(Parameters::new(&ParametersLiteral::SMALL).unwrap());
        let encoder: Encoder = Encoder::new(&params);
        let t: u64 = params.t();

        [0, 1, 42, t - 1].iter().for_each(|x| {
            let pt: Plaintext = encoder.encode(&[*x]).unwrap();
            let decoded: Vec<u64> = encoder.decode(&pt);
            assert_eq!(decoded.len(), params.n());
            assert_eq!(decoded[0], *x);
            assert!(decoded[1..].iter().all(|c| *c == 0));
        });
    }

    #[test]
    fn encode_rejects_invalid_input() {
        let params: Arc<Parameters> = Arc::new(Parameters::new(&ParametersLiteral::SMALL).unwrap());
        let encoder: Encoder = Encoder::new(&params);
        let t: u64 = params.t();
        assert_eq!(
            encoder.encode(&[3, t]).err(),
            Some(Error::ValueOutOfRange { value: t, t })
        );
        assert_eq!(
            encoder.encode(&vec![0; params.n() + 1]).err(),
            Some(Error::TooManyValues {
                len: params.n() + 1,
                n: params.n()
            })
        );
    }
}
