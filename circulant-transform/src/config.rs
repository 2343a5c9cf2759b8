//! Options controlling how a transform runs and how its output is written.

use serde::{Deserialize, Serialize};

/// What to do with NaN and infinite input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Feed them through the arithmetic unchanged.
    #[default]
    PassThrough,
    /// Fail on the first non-finite value.
    Reject,
}

/// Options for [`crate::transform_matrix`] and [`crate::circulant_transform_with`].
#[derive(Debug, Clone)]
pub struct TransformOptions {
    parallel: bool,
    precision: Option<usize>,
    non_finite: NonFinitePolicy,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            precision: None,
            non_finite: NonFinitePolicy::PassThrough,
        }
    }
}

impl TransformOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process blocks one after another on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable parallel block processing.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Write values with a fixed number of decimal places.
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Set the non-finite value policy.
    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn get_precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn get_non_finite(&self) -> NonFinitePolicy {
        self.non_finite
    }
}
