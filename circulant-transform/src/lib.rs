//! Circulant Transform - Block-diagonal averaging with circulant expansion.
//!
//! A matrix of M×N values is split into blocks of k consecutive rows and
//! groups of k consecutive columns. Each k×k sub-block is averaged along its
//! cyclic diagonals, and the averaged row is expanded back into k rows, each
//! a right rotation of the previous one. The output has the input's shape and
//! every k×k sub-block is circulant.
//!
//! # Text Format
//! - Input: `M N v_1 ... v_{M*N}`, whitespace separated, row-major
//! - Output: M lines of N values, each value followed by a space
//!
//! # Usage
//! ```ignore
//! use circulant_transform::{circulant_transform, transform_matrix, Matrix, TransformOptions};
//!
//! // File to file
//! circulant_transform("matrix.txt", "circulant.txt", 2)?;
//!
//! // In memory
//! let matrix = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
//! let out = transform_matrix(&matrix, 2, &TransformOptions::new())?;
//! assert_eq!(out.to_text(None), "2.5 2.5 \n2.5 2.5 \n");
//! ```

pub mod circulant;
pub mod config;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod transform;

// Re-exports
pub use circulant::{diagonal_average, expand_circulant, is_block_circulant, transform_block};
pub use config::{NonFinitePolicy, TransformOptions};
pub use error::{Error, ErrorKind, IoTarget, ParseError, ParsePosition, Result};
pub use layout::BlockLayout;
pub use matrix::Matrix;
pub use transform::{circulant_transform, circulant_transform_with, transform_matrix};
