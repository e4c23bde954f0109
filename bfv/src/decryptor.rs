use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keys::SecretKey;
use crate::parameters::Parameters;
use crate::plaintext::Plaintext;
use math::poly::PolyRNS;
use math::ring::RingRNS;
use math::ring::crt::residue;
use rug::Integer;
use std::sync::Arc;

pub struct Decryptor {
    params: Arc<Parameters>,
    sk: PolyRNS,
}

impl Decryptor {
    pub fn new(params: &Arc<Parameters>, sk: &SecretKey) -> Self {
        Self {
            params: params.clone(),
            sk: sk.value.clone(),
        }
    }

    /// Returns m = round(t * (sum_i c_i * s^i) / Q) mod t.
    pub fn decrypt(&self, ct: &Ciphertext) -> Result<Plaintext> {
        validate(&self.params, ct)?;

        let ring: &RingRNS = self.params.ring_q();

        // Horner: v <- (...(c_d * s + c_{d-1}) * s + ...) + c_0
        let mut v: PolyRNS = ct.at(ct.degree()).clone();
        let mut tmp: PolyRNS = ring.new_polyrns();
        for i in (0..ct.degree()).rev() {
            ring.mul(&v, &self.sk, &mut tmp);
            ring.add(&tmp, ct.at(i), &mut v);
        }

        let q: &Integer = self.params.q();
        let half_q: Integer = q.clone() >> 1u32;
        let t: u64 = self.params.t();

        let value: Vec<u64> = ring
            .to_integers(&v)
            .into_iter()
            .map(|mut x| {
                x *= t;
                x += &half_q;
                let (quotient, _) = x.div_rem_floor(q.clone());
                residue(&quotient, t)
            })
            .collect();

        Ok(Plaintext { value })
    }
}

/// Checks that `ct` lives in the ring of `params`.
pub(crate) fn validate(params: &Parameters, ct: &Ciphertext) -> Result<()> {
    if ct.value.is_empty() {
        return Err(Error::MalformedCiphertext("no components"));
    }
    let level: usize = params.ring_q().level();
    ct.value().iter().try_for_each(|c| {
        if c.n() != params.n() {
            return Err(Error::RingDegreeMismatch {
                expected: params.n(),
                found: c.n(),
            });
        }
        if c.level() != level {
            return Err(Error::MalformedCiphertext("modulus chain mismatch"));
        }
        Ok(())
    })
}
