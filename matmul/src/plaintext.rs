use crate::error::{Error, Result};
use crate::grid::{Grid, Matrix};
use rug::Integer;

/// Exact product A * B.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Grid<Integer>> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch {
            lhs_cols: a.cols(),
            rhs_rows: b.rows(),
        });
    }
    let (size, cols_b) = (a.cols(), b.cols());
    let (lhs, rhs) = (a.as_flat(), b.as_flat());
    Ok(Grid::from_fn(a.rows(), cols_b, |i, j| {
        let mut acc: Integer = Integer::new();
        (0..size).for_each(|k| acc += Integer::from(lhs[i * size + k] as u128 * rhs[k * cols_b + j] as u128));
        acc
    }))
}

/// A * B with every cell reduced mod t.
pub fn multiply_mod(a: &Matrix, b: &Matrix, t: u64) -> Result<Matrix> {
    let modulus: Integer = Integer::from(t);
    Ok(multiply(a, b)?.map(|x| x.clone().div_rem_euc(modulus.clone()).1.to_u64_wrapping()))
}

/// Fails with [Error::Wraparound] when a dot product of a row of `a` and a
/// column of `b` could reach `t`, i.e. when `a.cols * max(a) * max(b) >= t`.
pub fn check_headroom(a: &Matrix, b: &Matrix, t: u64) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch {
            lhs_cols: a.cols(),
            rhs_rows: b.rows(),
        });
    }
    let max_a: u64 = a.as_flat().iter().copied().max().unwrap_or(0);
    let max_b: u64 = b.as_flat().iter().copied().max().unwrap_or(0);
    let mut bound: Integer = Integer::from(max_a as u128 * max_b as u128);
    bound *= a.cols() as u64;
    if bound >= t {
        return Err(Error::Wraparound { bound, t });
    }
    Ok(())
}
