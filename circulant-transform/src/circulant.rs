//! Diagonal averaging and circulant expansion of k-row blocks.
//!
//! For a block of k rows and a column group g of width k, the averaged
//! value at offset j is the mean along the j-th cyclic diagonal of the
//! k×k sub-block:
//!
//! ```text
//! avg[g][j] = (1/k) * Σ_r block[r][g*k + (r + j) mod k]
//! ```
//!
//! Output row f of the block rotates every group slice right by f:
//!
//! ```text
//! out[f][g*k + p] = avg[g][(p + k - f) mod k]
//! ```

use crate::layout::BlockLayout;
use crate::matrix::Matrix;

/// Average a block along the cyclic diagonals of each k×k sub-block.
///
/// `block` holds k rows of `cols` values each, row-major. Returns the
/// length-`cols` averaged row.
pub fn diagonal_average(block: &[f64], cols: usize, k: usize) -> Vec<f64> {
    debug_assert_eq!(block.len(), k * cols);
    let scale = k as f64;
    let mut avg = Vec::with_capacity(cols);
    for group_start in (0..cols).step_by(k) {
        for j in 0..k {
            let mut sum = 0.0;
            for r in 0..k {
                sum += block[r * cols + group_start + (r + j) % k];
            }
            avg.push(sum / scale);
        }
    }
    avg
}

/// Expand an averaged row into k circulant rows, returned row-major.
///
/// Row 0 is `avg` itself; row f has each k-wide group rotated right by f.
pub fn expand_circulant(avg: &[f64], k: usize) -> Vec<f64> {
    debug_assert!(avg.len().is_multiple_of(k));
    let mut out = Vec::with_capacity(k * avg.len());
    for f in 0..k {
        for group in avg.chunks_exact(k) {
            for p in 0..k {
                out.push(group[(p + k - f) % k]);
            }
        }
    }
    out
}

/// Transform block `b` of `matrix` into its k circulant rows.
pub fn transform_block(matrix: &Matrix, layout: &BlockLayout, b: usize) -> Vec<f64> {
    let k = layout.block_size();
    let rows = layout.block_rows(b);
    let block = matrix.row_span(rows.start, rows.len());
    expand_circulant(&diagonal_average(block, matrix.cols(), k), k)
}

/// Check whether every k×k sub-block of `matrix` is circulant.
///
/// Such matrices are fixed points of the transform. Returns false when `k`
/// does not divide the matrix dimensions.
pub fn is_block_circulant(matrix: &Matrix, k: usize, tolerance: f64) -> bool {
    let Ok(layout) = BlockLayout::for_matrix(matrix, k) else {
        return false;
    };

    (0..layout.row_blocks()).all(|b| {
        let first = layout.block_rows(b).start;
        layout.block_rows(b).all(|row| {
            let f = row - first;
            (0..layout.col_groups()).all(|g| {
                let group = layout.group_cols(g);
                group.clone().all(|col| {
                    let p = col - group.start;
                    let expected = matrix.get(first, group.start + (p + k - f) % k);
                    (matrix.get(row, col) - expected).abs() <= tolerance
                })
            })
        })
    })
}
