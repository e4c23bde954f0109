use crate::error::{Error, Result};
use bfv::ciphertext::Ciphertext;
use std::fmt;

/// Plaintext matrix, elements in [0, t) once encrypted.
pub type Matrix = Grid<u64>;

/// Matrix of ciphertexts, one encrypted element per cell.
pub type CiphertextMatrix = Grid<Ciphertext>;

/// Dense row-major matrix: element (row, col) lives at `row * cols + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Shapes a row-major sequence as a rows x cols grid.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::ShapeMismatch {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a grid from nested rows. No rows gives a 0x0 grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols: usize = rows.first().map_or(0, |r| r.len());
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::RaggedRows {
                row,
                len: r.len(),
                cols,
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let data: Vec<T> = (0..rows * cols).map(|i| f(i / cols, i % cols)).collect();
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Inverse of [Grid::flat_index].
    pub fn position(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.data.len() {
            return Err(Error::FlatIndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok((index / self.cols, index % self.cols))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        Ok(&self.data[self.flat_index(row, col)?])
    }

    pub fn as_flat(&self) -> &[T] {
        &self.data
    }

    pub fn into_flat(self) -> Vec<T> {
        self.data
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub fn try_map<U, E>(&self, f: impl FnMut(&T) -> std::result::Result<U, E>) -> std::result::Result<Grid<U>, E> {
        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect::<std::result::Result<Vec<U>, E>>()?,
        })
    }
}

/// Nested bracket form, e.g. `[[19, 22], [43, 50]]`.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Row-major flattening: `flat[row * cols + col] = m[row][col]`.
pub fn flatten<T: Clone>(m: &Grid<T>) -> Vec<T> {
    m.as_flat().to_vec()
}

/// Inverse of [flatten].
pub fn unflatten<T>(flat: Vec<T>, rows: usize, cols: usize) -> Result<Grid<T>> {
    Grid::from_flat(rows, cols, flat)
}
