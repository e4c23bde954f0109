use crate::poly::{Poly, PolyRNS};
use crate::ring::{Ring, RingRNS};
use itertools::izip;

impl Ring {
    pub fn ntt_inplace(&self, a: &mut Poly) {
        self.dft.forward_inplace(&mut a.0)
    }

    pub fn intt_inplace(&self, a: &mut Poly) {
        self.dft.backward_inplace(&mut a.0)
    }

    /// c <- a + b
    pub fn add(&self, a: &Poly, b: &Poly, c: &mut Poly) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        izip!(&a.0, &b.0, c.0.iter_mut()).for_each(|(a, b, c)| *c = self.modulus.add(*a, *b));
    }

    /// b <- b + a
    pub fn add_inplace(&self, a: &Poly, b: &mut Poly) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        izip!(&a.0, b.0.iter_mut()).for_each(|(a, b)| *b = self.modulus.add(*a, *b));
    }

    /// b <- b - a
    pub fn sub_inplace(&self, a: &Poly, b: &mut Poly) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        izip!(&a.0, b.0.iter_mut()).for_each(|(a, b)| *b = self.modulus.sub(*b, *a));
    }

    pub fn neg_inplace(&self, a: &mut Poly) {
        a.0.iter_mut().for_each(|a| *a = self.modulus.neg(*a));
    }

    /// a <- s * a, with s in [0, q).
    pub fn mul_scalar_inplace(&self, s: u64, a: &mut Poly) {
        let s = self.modulus.prepare_shoup(s);
        a.0.iter_mut().for_each(|a| *a = self.modulus.mul_shoup(s, *a));
    }

    /// c <- a * b, all operands in evaluation form.
    pub fn mul_ntt(&self, a: &Poly, b: &Poly, c: &mut Poly) {
        izip!(&a.0, &b.0, c.0.iter_mut()).for_each(|(a, b, c)| *c = self.modulus.mul(*a, *b));
    }

    /// c <- c + a * b, all operands in evaluation form.
    pub fn mul_ntt_add_inplace(&self, a: &Poly, b: &Poly, c: &mut Poly) {
        izip!(&a.0, &b.0, c.0.iter_mut())
            .for_each(|(a, b, c)| *c = self.modulus.add(*c, self.modulus.mul(*a, *b)));
    }

    /// c <- a * b mod X^n+1, all operands in coefficient form.
    pub fn mul(&self, a: &Poly, b: &Poly, c: &mut Poly) {
        let mut b_ntt: Poly = b.clone();
        c.copy_from(a);
        self.ntt_inplace(c);
        self.ntt_inplace(&mut b_ntt);
        izip!(c.0.iter_mut(), &b_ntt.0).for_each(|(c, b)| *c = self.modulus.mul(*c, *b));
        self.intt_inplace(c);
    }

    /// Writes signed coefficients into `a`, padding with zeros.
    pub fn from_i64(&self, coeffs: &[i64], a: &mut Poly) {
        assert!(
            coeffs.len() <= a.n(),
            "invalid coeffs: coeffs.len()={} > a.n()={}",
            coeffs.len(),
            a.n()
        );
        a.zero();
        izip!(coeffs, a.0.iter_mut()).for_each(|(x, a)| *a = self.modulus.reduce_i64(*x));
    }
}

impl RingRNS {
    pub fn ntt_inplace(&self, a: &mut PolyRNS) {
        izip!(self.rings(), a.0.iter_mut()).for_each(|(r, a)| r.ntt_inplace(a));
    }

    pub fn intt_inplace(&self, a: &mut PolyRNS) {
        izip!(self.rings(), a.0.iter_mut()).for_each(|(r, a)| r.intt_inplace(a));
    }

    pub fn add(&self, a: &PolyRNS, b: &PolyRNS, c: &mut PolyRNS) {
        izip!(self.rings(), &a.0, &b.0, c.0.iter_mut()).for_each(|(r, a, b, c)| r.add(a, b, c));
    }

    pub fn add_inplace(&self, a: &PolyRNS, b: &mut PolyRNS) {
        izip!(self.rings(), &a.0, b.0.iter_mut()).for_each(|(r, a, b)| r.add_inplace(a, b));
    }

    pub fn sub_inplace(&self, a: &PolyRNS, b: &mut PolyRNS) {
        izip!(self.rings(), &a.0, b.0.iter_mut()).for_each(|(r, a, b)| r.sub_inplace(a, b));
    }

    pub fn neg_inplace(&self, a: &mut PolyRNS) {
        izip!(self.rings(), a.0.iter_mut()).for_each(|(r, a)| r.neg_inplace(a));
    }

    /// a <- s_i * a_i at each level i, where s holds one residue per prime.
    pub fn mul_scalar_inplace(&self, s: &[u64], a: &mut PolyRNS) {
        assert_eq!(s.len(), self.rings().len());
        izip!(self.rings(), s, a.0.iter_mut()).for_each(|(r, s, a)| r.mul_scalar_inplace(*s, a));
    }

    pub fn mul_ntt(&self, a: &PolyRNS, b: &PolyRNS, c: &mut PolyRNS) {
        izip!(self.rings(), &a.0, &b.0, c.0.iter_mut()).for_each(|(r, a, b, c)| r.mul_ntt(a, b, c));
    }

    pub fn mul_ntt_add_inplace(&self, a: &PolyRNS, b: &PolyRNS, c: &mut PolyRNS) {
        izip!(self.rings(), &a.0, &b.0, c.0.iter_mut())
            .for_each(|(r, a, b, c)| r.mul_ntt_add_inplace(a, b, c));
    }

    pub fn mul(&self, a: &PolyRNS, b: &PolyRNS, c: &mut PolyRNS) {
        izip!(self.rings(), &a.0, &b.0, c.0.iter_mut()).for_each(|(r, a, b, c)| r.mul(a, b, c));
    }

    /// Writes the same signed coefficients at every level of `a`.
    pub fn from_i64(&self, coeffs: &[i64], a: &mut PolyRNS) {
        izip!(self.rings(), a.0.iter_mut()).for_each(|(r, a)| r.from_i64(coeffs, a));
    }
}

#[cfg(test)]
mod tests {
    use crate::modulus::prime::Prime;
    use crate::modulus::prime_generation::NTTFriendlyPrimesGenerator;
    use crate::poly::PolyRNS;
    use crate::ring::RingRNS;
    use rug::Integer;

    #[test]
    fn mul_by_monomial_wraps_negacyclically() {
        let n: usize = 8;
        let primes: Vec<Prime> = NTTFriendlyPrimesGenerator::new(60, 2 * n as u64)
            .next_downstream_primes(2)
            .unwrap();
        let ring: RingRNS = RingRNS::new(n, &primes);

        let mut a: PolyRNS = ring.new_polyrns();
        let mut x: PolyRNS = ring.new_polyrns();
        let mut c: PolyRNS = ring.new_polyrns();
        ring.from_i64(&[1, 2, 3, 4, 5, 6, 7, 8], &mut a);
        ring.from_i64(&[0, 1], &mut x);
        ring.mul(&a, &x, &mut c);

        let got: Vec<Integer> = ring.to_integers_centered(&c);
        let want: Vec<i64> = vec![-8, 1, 2, 3, 4, 5, 6, 7];
        got.iter().zip(want).for_each(|(g, w)| assert_eq!(*g, w));
    }

    #[test]
    fn add_sub_neg() {
        let n: usize = 4;
        let primes: Vec<Prime> = NTTFriendlyPrimesGenerator::new(40, 2 * n as u64)
            .next_downstream_primes(2)
            .unwrap();
        let ring: RingRNS = RingRNS::new(n, &primes);

        let mut a: PolyRNS = ring.new_polyrns();
        let mut b: PolyRNS = ring.new_polyrns();
        ring.from_i64(&[5, -3, 0, 7], &mut a);
        ring.from_i64(&[1, 1, 1, 1], &mut b);

        ring.add_inplace(&a, &mut b);
        ring.sub_inplace(&a, &mut b);
        ring.neg_inplace(&mut b);
        ring.mul_scalar_inplace(&ring.residues(&Integer::from(3)), &mut b);

        let got: Vec<Integer> = ring.to_integers_centered(&b);
        got.iter().for_each(|x| assert_eq!(*x, -3));
    }
}
