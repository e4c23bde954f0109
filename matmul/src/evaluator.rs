use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::reduce::{Reduction, reduce};
use bfv::ciphertext::Ciphertext;
use bfv::evaluator::Evaluator;
use rayon::prelude::*;

/// Ring operations the multiply-accumulate evaluator needs from a scheme.
pub trait CipherOps: Sync {
    type Ciphertext: Send + Sync;

    fn mul(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Result<Self::Ciphertext>;

    fn add(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Result<Self::Ciphertext>;
}

impl CipherOps for Evaluator {
    type Ciphertext = Ciphertext;

    fn mul(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        Ok(Evaluator::mul(self, a, b)?)
    }

    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        Ok(Evaluator::add(self, a, b)?)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    Serial,
    /// One rayon task per output cell.
    Parallel,
}

/// Homomorphic matrix product: cell (i, j) is the dot product of row i of A
/// and column j of B, computed with `ops`.
pub struct MatMul<'a, O: CipherOps> {
    ops: &'a O,
    reduction: Reduction,
    execution: Execution,
}

impl<'a, O: CipherOps> MatMul<'a, O> {
    pub fn new(ops: &'a O) -> Self {
        Self {
            ops,
            reduction: Reduction::default(),
            execution: Execution::default(),
        }
    }

    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn multiply(&self, a: &Grid<O::Ciphertext>, b: &Grid<O::Ciphertext>) -> Result<Grid<O::Ciphertext>> {
        if a.cols() != b.rows() {
            return Err(Error::DimensionMismatch {
                lhs_cols: a.cols(),
                rhs_rows: b.rows(),
            });
        }
        let flat: Vec<O::Ciphertext> = self.multiply_flat(a.as_flat(), b.as_flat(), a.rows(), a.cols(), b.cols())?;
        Grid::from_flat(a.rows(), b.cols(), flat)
    }

    /// Row-major operands: `a` is rows_a x size, `b` is size x cols_b.
    /// Returns the rows_a x cols_b product, row-major.
    pub fn multiply_flat(
        &self,
        a: &[O::Ciphertext],
        b: &[O::Ciphertext],
        rows_a: usize,
        size: usize,
        cols_b: usize,
    ) -> Result<Vec<O::Ciphertext>> {
        if size == 0 {
            return Err(Error::EmptyInnerDimension);
        }
        if rows_a.checked_mul(size) != Some(a.len()) {
            return Err(Error::ShapeMismatch {
                len: a.len(),
                rows: rows_a,
                cols: size,
            });
        }
        if size.checked_mul(cols_b) != Some(b.len()) {
            return Err(Error::ShapeMismatch {
                len: b.len(),
                rows: size,
                cols: cols_b,
            });
        }

        let cells: usize = rows_a * cols_b;
        let cell = |index: usize| self.cell(a, b, size, cols_b, index);
        match self.execution {
            Execution::Serial => (0..cells).map(cell).collect(),
            Execution::Parallel => (0..cells).into_par_iter().map(cell).collect(),
        }
    }

    fn cell(&self, a: &[O::Ciphertext], b: &[O::Ciphertext], size: usize, cols_b: usize, index: usize) -> Result<O::Ciphertext> {
        let (i, j) = (index / cols_b, index % cols_b);
        let products: Vec<O::Ciphertext> = (0..size)
            .map(|k| self.ops.mul(&a[i * size + k], &b[k * cols_b + j]))
            .collect::<Result<Vec<O::Ciphertext>>>()?;
        reduce(products, self.reduction, |x, y| self.ops.add(x, y))?.ok_or(Error::EmptyInnerDimension)
    }
}

#[cfg(test)]
mod tests {
    use super::{CipherOps, Execution, MatMul};
    use crate::error::{Error, Result};
    use crate::grid::{Grid, Matrix};
    use crate::plaintext::multiply;
    use crate::reduce::Reduction;
    use itertools::iproduct;
    use rug::Integer;

    /// Plaintext stand-in for the scheme: exact integer arithmetic.
    struct Exact;

    impl CipherOps for Exact {
        type Ciphertext = Integer;

        fn mul(&self, a: &Integer, b: &Integer) -> Result<Integer> {
            Ok(Integer::from(a * b))
        }

        fn add(&self, a: &Integer, b: &Integer) -> Result<Integer> {
            Ok(Integer::from(a + b))
        }
    }

    fn lift(m: &Matrix) -> Grid<Integer> {
        m.map(|x| Integer::from(*x))
    }

    #[test]
    fn strategies_match_reference() {
        let a: Matrix = Grid::from_fn(3, 4, |r, c| (7 * r + 3 * c + 1) as u64);
        let b: Matrix = Grid::from_fn(4, 2, |r, c| (5 * r + c + 2) as u64);
        let want: Grid<Integer> = multiply(&a, &b).unwrap();

        iproduct!(
            [Reduction::Sequential, Reduction::Tree],
            [Execution::Serial, Execution::Parallel]
        )
        .for_each(|(reduction, execution)| {
            let got: Grid<Integer> = MatMul::new(&Exact)
                .with_reduction(reduction)
                .with_execution(execution)
                .multiply(&lift(&a), &lift(&b))
                .unwrap();
            assert_eq!(got, want, "{:?} {:?}", reduction, execution);
        });
    }

    #[test]
    fn guards() {
        let a: Grid<Integer> = lift(&Grid::from_fn(2, 3, |_, _| 1));
        let mm = MatMul::new(&Exact);
        assert_eq!(
            mm.multiply(&a, &a).err(),
            Some(Error::DimensionMismatch { lhs_cols: 3, rhs_rows: 2 })
        );
        let e: Grid<Integer> = Grid::from_flat(2, 0, vec![]).unwrap();
        let f: Grid<Integer> = Grid::from_flat(0, 2, vec![]).unwrap();
        assert_eq!(mm.multiply(&e, &f).err(), Some(Error::EmptyInnerDimension));

        let short: Vec<Integer> = vec![Integer::from(1); 5];
        assert_eq!(
            mm.multiply_flat(&short, &short, 2, 3, 1).err(),
            Some(Error::ShapeMismatch { len: 5, rows: 2, cols: 3 })
        );
    }
}
