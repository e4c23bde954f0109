/// Polynomial of degree < n, one u64 residue per coefficient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly(pub Vec<u64>);

impl Poly {
    pub fn new(n: usize) -> Self {
        Self(vec![0; n])
    }

    pub fn n(&self) -> usize {
        self.0.len()
    }

    pub fn zero(&mut self) {
        self.0.fill(0)
    }

    pub fn copy_from(&mut self, other: &Poly) {
        self.0.resize(other.n(), 0);
        self.0.copy_from_slice(&other.0)
    }
}

/// Polynomial in RNS representation: one [Poly] per prime of the chain,
/// the residue modulo the i-th prime stored at level i.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyRNS(pub Vec<Poly>);

impl PolyRNS {
    pub fn new(n: usize, level: usize) -> Self {
        Self((0..level + 1).map(|_| Poly::new(n)).collect())
    }

    pub fn n(&self) -> usize {
        self.0[0].n()
    }

    pub fn level(&self) -> usize {
        self.0.len() - 1
    }

    pub fn at(&self, level: usize) -> &Poly {
        assert!(
            level <= self.level(),
            "invalid argument level: level={} > self.level()={}",
            level,
            self.level()
        );
        &self.0[level]
    }

    pub fn at_mut(&mut self, level: usize) -> &mut Poly {
        assert!(
            level <= self.level(),
            "invalid argument level: level={} > self.level()={}",
            level,
            self.level()
        );
        &mut self.0[level]
    }

    pub fn zero(&mut self) {
        self.0.iter_mut().for_each(|p| p.zero())
    }
}
