//! Whole-matrix and whole-file circulant transforms.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::circulant::transform_block;
use crate::config::{NonFinitePolicy, TransformOptions};
use crate::error::{Error, Result};
use crate::layout::BlockLayout;
use crate::matrix::io::read_input;
use crate::matrix::Matrix;

/// Replace every k-row block of `matrix` with its circulant expansion.
///
/// Blocks are independent; with `options.is_parallel()` they are computed
/// on the rayon pool and reassembled in block order, so the result is the
/// same either way.
pub fn transform_matrix(matrix: &Matrix, k: usize, options: &TransformOptions) -> Result<Matrix> {
    let layout = BlockLayout::for_matrix(matrix, k)?;

    if options.get_non_finite() == NonFinitePolicy::Reject {
        if let Some((row, col, value)) = matrix.first_non_finite() {
            return Err(Error::NonFinite { row, col, value });
        }
    }

    Ok(transform_with_layout(matrix, &layout, options.is_parallel()))
}

fn transform_with_layout(matrix: &Matrix, layout: &BlockLayout, parallel: bool) -> Matrix {
    debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        k = layout.block_size(),
        blocks = layout.row_blocks(),
        parallel,
        "transforming blocks"
    );

    let blocks: Vec<Vec<f64>> = if parallel {
        (0..layout.row_blocks())
            .into_par_iter()
            .map(|b| transform_block(matrix, layout, b))
            .collect()
    } else {
        (0..layout.row_blocks())
            .map(|b| transform_block(matrix, layout, b))
            .collect()
    };

    Matrix::from_dense(blocks.concat(), matrix.shape())
}

/// Read `input`, transform it with block size `k`, and write `output`.
pub fn circulant_transform(input: impl AsRef<Path>, output: impl AsRef<Path>, k: usize) -> Result<()> {
    circulant_transform_with(input, output, k, &TransformOptions::default())
}

/// [`circulant_transform`] with explicit options.
///
/// The block size is validated right after the header is read, and the
/// output file is only created once the whole transform has succeeded.
pub fn circulant_transform_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    k: usize,
    options: &TransformOptions,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let text = read_input(input)?;
    let (matrix, layout) = Matrix::parse_blocked(&text, k, options.get_non_finite())?;
    debug!(input = %input.display(), rows = matrix.rows(), cols = matrix.cols(), "loaded matrix");

    let result = transform_with_layout(&matrix, &layout, options.is_parallel());
    result.save(output, options.get_precision())?;

    info!(output = %output.display(), blocks = layout.row_blocks(), "wrote circulant matrix");
    Ok(())
}
