//! Block layout: how a matrix splits into k-row blocks and k-column groups.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validated block size together with the matrix shape it divides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    k: usize,
    rows: usize,
    cols: usize,
}

impl BlockLayout {
    /// Check that `k` evenly divides both dimensions.
    pub fn new(k: usize, rows: usize, cols: usize) -> Result<Self> {
        if k == 0 || !rows.is_multiple_of(k) || !cols.is_multiple_of(k) {
            return Err(Error::InvalidParameter { k, rows, cols });
        }
        Ok(Self { k, rows, cols })
    }

    pub fn for_matrix(matrix: &Matrix, k: usize) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        Self::new(k, rows, cols)
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.k
    }

    /// Number of k-row blocks (M / k).
    #[inline]
    pub fn row_blocks(&self) -> usize {
        self.rows / self.k
    }

    /// Number of k-column groups per row (N / k).
    #[inline]
    pub fn col_groups(&self) -> usize {
        self.cols / self.k
    }

    /// Source rows covered by block `b`.
    #[inline]
    pub fn block_rows(&self, b: usize) -> Range<usize> {
        b * self.k..(b + 1) * self.k
    }

    /// Columns covered by group `g`.
    #[inline]
    pub fn group_cols(&self, g: usize) -> Range<usize> {
        g * self.k..(g + 1) * self.k
    }
}
