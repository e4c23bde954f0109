use crate::modulus::WordOps;
use crate::poly::{Poly, PolyRNS};
use crate::ring::{Ring, RingRNS};
use rand_distr::{Distribution, Normal};
use sampling::source::Source;

impl Ring {
    pub fn fill_uniform(&self, source: &mut Source, a: &mut Poly) {
        let max: u64 = self.modulus.q();
        let mask: u64 = max.mask();
        a.0.iter_mut().for_each(|a| *a = source.next_u64n(max, mask));
    }
}

impl RingRNS {
    /// Uniform in Z_Q: independent uniform residues at each level.
    pub fn fill_uniform(&self, source: &mut Source, a: &mut PolyRNS) {
        self.rings()
            .iter()
            .enumerate()
            .for_each(|(i, r)| r.fill_uniform(source, a.at_mut(i)));
    }

    /// Rounded Gaussian coefficients, resampled while |x| > bound.
    /// Returns the sampled integers.
    pub fn fill_normal(&self, source: &mut Source, dist: &Normal<f64>, bound: f64, a: &mut PolyRNS) -> Vec<i64> {
        let coeffs: Vec<i64> = (0..a.n())
            .map(|_| {
                let mut x: f64 = dist.sample(source);
                while x.abs() > bound {
                    x = dist.sample(source);
                }
                x.round() as i64
            })
            .collect();
        self.from_i64(&coeffs, a);
        coeffs
    }

    /// Coefficients in {-1, 0, 1}, nonzero with probability `prob`.
    /// Returns the sampled integers.
    pub fn fill_ternary(&self, source: &mut Source, prob: f64, a: &mut PolyRNS) -> Vec<i64> {
        let coeffs: Vec<i64> = (0..a.n()).map(|_| source.next_ternary(prob)).collect();
        self.from_i64(&coeffs, a);
        coeffs
    }
}

#[cfg(test)]
mod tests {
    use crate::modulus::prime::Prime;
    use crate::modulus::prime_generation::NTTFriendlyPrimesGenerator;
    use crate::poly::PolyRNS;
    use crate::ring::RingRNS;
    use rand_distr::Normal;
    use rug::Integer;
    use sampling::source::Source;

    fn ring() -> RingRNS {
        let n: usize = 256;
        let primes: Vec<Prime> = NTTFriendlyPrimesGenerator::new(55, 2 * n as u64)
            .next_downstream_primes(2)
            .unwrap();
        RingRNS::new(n, &primes)
    }

    #[test]
    fn normal_is_bounded_and_consistent_across_levels() {
        let ring: RingRNS = ring();
        let mut source: Source = Source::new([0u8; 32]);
        let sigma: f64 = 3.2;
        let bound: f64 = 6.0 * sigma;
        let mut a: PolyRNS = ring.new_polyrns();
        let coeffs: Vec<i64> = ring.fill_normal(&mut source, &Normal::new(0.0, sigma).unwrap(), bound, &mut a);
        coeffs.iter().for_each(|x| assert!((*x as f64).abs() <= bound.round()));
        let back: Vec<Integer> = ring.to_integers_centered(&a);
        back.iter().zip(&coeffs).for_each(|(b, x)| assert_eq!(*b, *x));
    }

    #[test]
    fn uniform_is_reduced() {
        let ring: RingRNS = ring();
        let mut source: Source = Source::new([0u8; 32]);
        let mut a: PolyRNS = ring.new_polyrns();
        ring.fill_uniform(&mut source, &mut a);
        ring.rings()
            .iter()
            .zip(&a.0)
            .for_each(|(r, a)| a.0.iter().for_each(|x| assert!(*x < r.modulus.q())));
    }

    #[test]
    fn ternary_values() {
        let ring: RingRNS = ring();
        let mut source: Source = Source::new([0u8; 32]);
        let mut a: PolyRNS = ring.new_polyrns();
        let coeffs: Vec<i64> = ring.fill_ternary(&mut source, 0.5, &mut a);
        assert!(coeffs.iter().all(|x| (-1..=1).contains(x)));
        assert!(coeffs.iter().any(|x| *x != 0));
    }
}
