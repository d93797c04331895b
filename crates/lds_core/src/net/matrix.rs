//! Per-dimension generator matrices over GF(2).

use crate::error::{LdsError, Result};

/// Width of a generator column in bits.
pub const MAXBITS: u32 = 32;

/// Binary generator matrix of a base-2 digital net.
///
/// Dimension `j` owns `n_cols` 32-bit columns stored contiguously. Column
/// `c` is the image of index bit `c`: bit `31 - r` of the column is the
/// coefficient feeding output digit `r` (the most significant bit is the
/// first binary digit of the coordinate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorMatrix {
    dim: usize,
    n_cols: u32,
    columns: Vec<u32>,
}

impl GeneratorMatrix {
    /// Wraps column data laid out dimension by dimension.
    ///
    /// # Errors
    ///
    /// - [`LdsError::InvalidDimension`] if `dim == 0` or `dim * n_cols`
    ///   overflows
    /// - [`LdsError::InvalidColumnCount`] if `n_cols >= 32`
    /// - [`LdsError::ColumnCountMismatch`] if `columns.len() != dim * n_cols`
    pub fn new(dim: usize, n_cols: u32, columns: Vec<u32>) -> Result<Self> {
        if dim == 0 {
            return Err(LdsError::InvalidDimension {
                dim,
                max: usize::MAX,
            });
        }
        if n_cols >= MAXBITS {
            return Err(LdsError::InvalidColumnCount {
                n_cols,
                max_bits: MAXBITS,
            });
        }
        let expected = dim
            .checked_mul(n_cols as usize)
            .ok_or_else(|| LdsError::InvalidDimension {
                dim,
                max: usize::MAX / n_cols as usize,
            })?;
        if columns.len() != expected {
            return Err(LdsError::ColumnCountMismatch {
                expected,
                actual: columns.len(),
            });
        }
        Ok(Self {
            dim,
            n_cols,
            columns,
        })
    }

    /// All-zero matrix of the same shape as `self`.
    pub(crate) fn zeroed_like(&self) -> Self {
        Self {
            dim: self.dim,
            n_cols: self.n_cols,
            columns: vec![0; self.columns.len()],
        }
    }

    /// Number of dimensions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of columns per dimension (log2 of the point count).
    #[inline]
    pub fn n_cols(&self) -> u32 {
        self.n_cols
    }

    /// Number of points addressed by the matrix, `2^n_cols`.
    #[inline]
    pub fn points(&self) -> usize {
        1usize << self.n_cols
    }

    /// Column `c` of dimension `j`.
    #[inline]
    pub fn column(&self, j: usize, c: usize) -> u32 {
        self.columns[j * self.n_cols as usize + c]
    }

    /// Columns of dimension `j`.
    #[inline]
    pub fn columns_of(&self, j: usize) -> &[u32] {
        let k = self.n_cols as usize;
        &self.columns[j * k..(j + 1) * k]
    }

    /// Mutable columns of dimension `j`.
    #[inline]
    pub fn columns_of_mut(&mut self, j: usize) -> &mut [u32] {
        let k = self.n_cols as usize;
        &mut self.columns[j * k..(j + 1) * k]
    }

    /// Raw column data, dimension by dimension.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.columns
    }

    /// Value of coordinate `j` for the digit vector `digits`: the XOR of
    /// every column whose bit is set in `digits`.
    pub fn apply(&self, j: usize, digits: usize) -> u32 {
        self.columns_of(j)
            .iter()
            .enumerate()
            .filter(|&(c, _)| (digits >> c) & 1 != 0)
            .fold(0, |acc, (_, &col)| acc ^ col)
    }
}
