use crate::error::{Error, Result};
use crate::grid::{Grid, Matrix};
use sampling::source::Source;

/// rows x cols matrix with independent uniform elements in [0, bound).
pub fn generate(rows: usize, cols: usize, bound: u64, source: &mut Source) -> Result<Matrix> {
    if bound == 0 {
        return Err(Error::EmptyBound);
    }
    Ok(Grid::from_fn(rows, cols, |_, _| source.next_u64_below(bound)))
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::error::Error;
    use crate::grid::Matrix;
    use sampling::source::Source;

    #[test]
    fn generate_respects_shape_and_bound() {
        let mut source: Source = Source::new([0u8; 32]);
        let m: Matrix = generate(3, 7, 100, &mut source).unwrap();
        assert_eq!((m.rows(), m.cols()), (3, 7));
        assert!(m.as_flat().iter().all(|x| *x < 100));

        let ones: Matrix = generate(2, 2, 1, &mut source).unwrap();
        assert!(ones.as_flat().iter().all(|x| *x == 0));

        assert_eq!(generate(2, 2, 0, &mut source).err(), Some(Error::EmptyBound));
    }

    #[test]
    fn generate_is_reproducible() {
        let a: Matrix = generate(4, 4, 1 << 20, &mut Source::new([9u8; 32])).unwrap();
        let b: Matrix = generate(4, 4, 1 << 20, &mut Source::new([9u8; 32])).unwrap();
        assert_eq!(a, b);
    }
}
