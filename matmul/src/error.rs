use rug::Integer;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("dimension mismatch: lhs has {lhs_cols} columns, rhs has {rhs_rows} rows")]
    DimensionMismatch { lhs_cols: usize, rhs_rows: usize },

    #[error("inner dimension is zero")]
    EmptyInnerDimension,

    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("flat index {index} out of bounds for length {len}")]
    FlatIndexOutOfBounds { index: usize, len: usize },

    #[error("{len} elements cannot be shaped as {rows}x{cols}")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },

    #[error("row {row} has {len} elements, expected {cols}")]
    RaggedRows { row: usize, len: usize, cols: usize },

    #[error("element bound must be positive")]
    EmptyBound,

    #[error("worst-case dot product {bound} reaches the plaintext modulus {t}")]
    Wraparound { bound: Integer, t: u64 },

    #[error("scheme error: {0}")]
    Scheme(#[from] bfv::Error),
}
