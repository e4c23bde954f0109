use crate::ciphertext::Ciphertext;
use crate::decryptor::validate;
use crate::error::{Error, Result};
use crate::parameters::Parameters;
use math::poly::PolyRNS;
use math::ring::RingRNS;
use rug::Integer;
use std::sync::Arc;

/// Homomorphic addition and multiplication. No relinearization: the product
/// of two degree-1 ciphertexts is returned as a degree-2 ciphertext.
pub struct Evaluator {
    params: Arc<Parameters>,
    t2: Integer,
    q2: Integer,
}

impl Evaluator {
    pub fn new(params: &Arc<Parameters>) -> Self {
        Self {
            params: params.clone(),
            t2: Integer::from(params.t()) << 1u32,
            q2: params.q().clone() << 1u32,
        }
    }

    pub fn params(&self) -> &Arc<Parameters> {
        &self.params
    }

    /// Component-wise sum; the shorter operand is padded with zeros.
    pub fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        validate(&self.params, a)?;
        validate(&self.params, b)?;

        let ring: &RingRNS = self.params.ring_q();
        let (long, short) = if a.degree() >= b.degree() { (a, b) } else { (b, a) };

        let mut value: Vec<PolyRNS> = long.value.clone();
        value
            .iter_mut()
            .zip(short.value())
            .for_each(|(res, c)| ring.add_inplace(c, res));

        Ok(Ciphertext { value })
    }

    /// Tensor product of two degree-1 ciphertexts scaled by t/Q:
    /// (a0*b0, a0*b1 + a1*b0, a1*b1).
    ///
    /// Components are lifted to centered integers, multiplied exactly in an
    /// auxiliary RNS basis P large enough to hold the unreduced products, then
    /// rounded back to R_Q.
    pub fn mul(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        validate(&self.params, a)?;
        validate(&self.params, b)?;

        if a.degree() != 1 || b.degree() != 1 {
            return Err(Error::UnsupportedDegree {
                lhs: a.degree(),
                rhs: b.degree(),
            });
        }

        let ring_p: &RingRNS = self.params.ring_p();

        let a0: PolyRNS = self.lift(a.at(0));
        let a1: PolyRNS = self.lift(a.at(1));
        let b0: PolyRNS = self.lift(b.at(0));
        let b1: PolyRNS = self.lift(b.at(1));

        let mut d0: PolyRNS = ring_p.new_polyrns();
        let mut d1: PolyRNS = ring_p.new_polyrns();
        let mut d2: PolyRNS = ring_p.new_polyrns();

        ring_p.mul_ntt(&a0, &b0, &mut d0);
        ring_p.mul_ntt(&a0, &b1, &mut d1);
        ring_p.mul_ntt_add_inplace(&a1, &b0, &mut d1);
        ring_p.mul_ntt(&a1, &b1, &mut d2);

        Ok(Ciphertext {
            value: vec![self.scale_down(d0), self.scale_down(d1), self.scale_down(d2)],
        })
    }

    /// R_Q -> R_P in evaluation form, through the centered representative.
    fn lift(&self, a: &PolyRNS) -> PolyRNS {
        let ring_p: &RingRNS = self.params.ring_p();
        let mut res: PolyRNS = ring_p.new_polyrns();
        ring_p.from_integers(&self.params.ring_q().to_integers_centered(a), &mut res);
        ring_p.ntt_inplace(&mut res);
        res
    }

    /// R_P in evaluation form -> round(t * x / Q) in R_Q.
    fn scale_down(&self, mut a: PolyRNS) -> PolyRNS {
        let ring_p: &RingRNS = self.params.ring_p();
        let ring_q: &RingRNS = self.params.ring_q();

        ring_p.intt_inplace(&mut a);

        // round(t*x/Q) = floor((2*t*x + Q) / 2Q)
        let coeffs: Vec<Integer> = ring_p
            .to_integers_centered(&a)
            .into_iter()
            .map(|mut x| {
                x *= &self.t2;
                x += self.params.q();
                x.div_rem_floor(self.q2.clone()).0
            })
            .collect();

        let mut res: PolyRNS = ring_q.new_polyrns();
        ring_q.from_integers(&coeffs, &mut res);
        res
    }
}
