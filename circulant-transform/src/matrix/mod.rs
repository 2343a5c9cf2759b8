//! Matrix - Dense row-major matrix of f64 values.

pub(crate) mod io;

/// Dense matrix stored row-major in a single buffer.
///
/// Built once (by the loader or [`Matrix::from_dense`]) and read-only afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Row-major values, `rows * cols` long
    data: Vec<f64>,
    /// Matrix shape (rows, cols)
    shape: (usize, usize),
}

impl Matrix {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a Matrix from dense row-major data.
    ///
    /// # Panics
    /// Panics if data length doesn't match rows * cols
    pub fn from_dense(data: Vec<f64>, shape: (usize, usize)) -> Self {
        let (rows, cols) = shape;
        assert_eq!(
            data.len(),
            rows * cols,
            "Data length {} doesn't match shape {}x{} = {}",
            data.len(),
            rows,
            cols,
            rows * cols
        );
        Self { data, shape }
    }

    /// Create a Matrix from a slice of rows.
    ///
    /// # Panics
    /// Panics if the rows are not all the same length
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "Row {} has {} values, expected {}", idx, row.len(), cols);
            data.extend_from_slice(row);
        }
        Self::from_dense(data, (rows.len(), cols))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get matrix dimensions (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.0
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.1
    }

    /// Value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.shape.1 + col]
    }

    /// A single row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        self.row_span(row, 1)
    }

    /// `count` consecutive rows starting at `start`, as one row-major slice.
    #[inline]
    pub fn row_span(&self, start: usize, count: usize) -> &[f64] {
        let cols = self.shape.1;
        &self.data[start * cols..(start + count) * cols]
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0; an empty matrix simply has no rows
        self.data.chunks_exact(self.shape.1.max(1))
    }

    /// Row-major view of all values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Position of the first NaN or infinite value, if any.
    pub fn first_non_finite(&self) -> Option<(usize, usize, f64)> {
        let cols = self.shape.1;
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|idx| (idx / cols, idx % cols, self.data[idx]))
    }
}
