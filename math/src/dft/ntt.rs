use crate::modulus::WordOps;
use crate::modulus::prime::Prime;
use crate::modulus::shoup::Shoup;
use itertools::izip;

/// Negacyclic NTT over Z_q[X]/(X^n+1), with the powers of the 2n-th root
/// stored in bit-reversed order.
pub struct Table {
    prime: Prime,
    psi: u64,
    psi_forward_rev: Vec<Shoup>,
    psi_backward_rev: Vec<Shoup>,
    n_inv: Shoup,
}

impl Table {
    pub fn new(prime: Prime, nth_root: u64) -> Table {
        assert!(
            nth_root.is_power_of_two() && nth_root >= 4,
            "invalid argument: nth_root = {} is not a power of two >= 4",
            nth_root
        );

        let psi: u64 = prime.primitive_nth_root(nth_root);
        let psi_inv: u64 = prime.inv(psi);

        let n: usize = (nth_root >> 1) as usize;

        let mut psi_forward_rev: Vec<Shoup> = vec![Shoup(0, 0); n];
        let mut psi_backward_rev: Vec<Shoup> = vec![Shoup(0, 0); n];

        let log_n: u32 = n.log2() as _;

        let mut powers_forward: u64 = 1u64;
        let mut powers_backward: u64 = 1u64;

        for i in 0..n {
            let i_rev: usize = i.reverse_bits_msb(log_n);
            psi_forward_rev[i_rev] = prime.prepare_shoup(powers_forward);
            psi_backward_rev[i_rev] = prime.prepare_shoup(powers_backward);
            powers_forward = prime.mul(powers_forward, psi);
            powers_backward = prime.mul(powers_backward, psi_inv);
        }

        Self {
            prime,
            psi,
            psi_forward_rev,
            psi_backward_rev,
            n_inv: prime.prepare_shoup(prime.inv(n as u64)),
        }
    }

    pub fn psi(&self) -> u64 {
        self.psi
    }

    pub fn n(&self) -> usize {
        self.psi_forward_rev.len()
    }

    /// Coefficients to evaluation form, outputs in [0, q).
    pub fn forward_inplace(&self, a: &mut [u64]) {
        let n: usize = a.len();
        assert!(
            n == self.n(),
            "invalid a.len() = {} must be {}",
            n,
            self.n()
        );
        let log_n: u32 = n.log2() as _;

        for layer in 0..log_n {
            let (m, size) = (1 << layer, 1 << (log_n - layer - 1));
            izip!(a.chunks_exact_mut(2 * size), &self.psi_forward_rev[m..]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(size);
                izip!(a, b).for_each(|(a, b)| self.dit_inplace(a, b, *psi));
            });
        }
    }

    #[inline(always)]
    fn dit_inplace(&self, a: &mut u64, b: &mut u64, psi: Shoup) {
        debug_assert!(*a < self.prime.q(), "a:{} q:{}", a, self.prime.q());
        debug_assert!(*b < self.prime.q(), "b:{} q:{}", b, self.prime.q());
        let bt: u64 = self.prime.mul_shoup(psi, *b);
        *b = self.prime.sub(*a, bt);
        *a = self.prime.add(*a, bt);
    }

    /// Evaluation form back to coefficients, outputs in [0, q).
    pub fn backward_inplace(&self, a: &mut [u64]) {
        let n: usize = a.len();
        assert!(
            n == self.n(),
            "invalid a.len() = {} must be {}",
            n,
            self.n()
        );
        let log_n: u32 = n.log2() as _;

        for layer in (0..log_n).rev() {
            let (m, size) = (1 << layer, 1 << (log_n - layer - 1));
            izip!(a.chunks_exact_mut(2 * size), &self.psi_backward_rev[m..]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(size);
                izip!(a, b).for_each(|(a, b)| self.dif_inplace(a, b, *psi));
            });
        }

        a.iter_mut()
            .for_each(|a| *a = self.prime.mul_shoup(self.n_inv, *a));
    }

    #[inline(always)]
    fn dif_inplace(&self, a: &mut u64, b: &mut u64, psi: Shoup) {
        debug_assert!(*a < self.prime.q(), "a:{} q:{}", a, self.prime.q());
        debug_assert!(*b < self.prime.q(), "b:{} q:{}", b, self.prime.q());
        let d: u64 = self.prime.sub(*a, *b);
        *a = self.prime.add(*a, *b);
        *b = self.prime.mul_shoup(psi, d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampling::source::Source;

    fn negacyclic_schoolbook(prime: &Prime, a: &[u64], b: &[u64]) -> Vec<u64> {
        let n: usize = a.len();
        let mut c: Vec<u64> = vec![0; n];
        for i in 0..n {
            for j in 0..n {
                let ab: u64 = prime.mul(a[i], b[j]);
                if i + j < n {
                    c[i + j] = prime.add(c[i + j], ab);
                } else {
                    c[i + j - n] = prime.sub(c[i + j - n], ab);
                }
            }
        }
        c
    }

    #[test]
    fn test_ntt() {
        let prime_instance: Prime = Prime::new(0x800000000004001);
        let n: u64 = 32;
        let ntt_table: Table = Table::new(prime_instance, n << 1);
        let mut a: Vec<u64> = (0..n).collect();
        let b: Vec<u64> = a.clone();
        ntt_table.forward_inplace(&mut a);
        assert!(a != b);
        ntt_table.backward_inplace(&mut a);
        assert!(a == b);
    }

    #[test]
    fn ntt_product_is_negacyclic() {
        let prime: Prime = Prime::new(0x1fffffffffe00001);
        let n: usize = 64;
        let table: Table = Table::new(prime, (n as u64) << 1);
        let mut source: Source = Source::new([0u8; 32]);
        let a: Vec<u64> = (0..n).map(|_| source.next_u64_below(prime.q())).collect();
        let b: Vec<u64> = (0..n).map(|_| source.next_u64_below(prime.q())).collect();

        let want: Vec<u64> = negacyclic_schoolbook(&prime, &a, &b);

        let mut a_ntt: Vec<u64> = a.clone();
        let mut b_ntt: Vec<u64> = b.clone();
        table.forward_inplace(&mut a_ntt);
        table.forward_inplace(&mut b_ntt);
        let mut c: Vec<u64> = izip!(&a_ntt, &b_ntt).map(|(x, y)| prime.mul(*x, *y)).collect();
        table.backward_inplace(&mut c);

        assert_eq!(c, want);
    }
}
