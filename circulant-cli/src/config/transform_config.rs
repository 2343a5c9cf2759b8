//! Transform configuration loaded from JSON.

use circulant_transform::{NonFinitePolicy, TransformOptions};
use serde::{Deserialize, Serialize};

/// Optional settings for a transform run. Every field has a default, so an
/// empty JSON object is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Process blocks on the rayon pool
    pub parallel: bool,

    /// Size of a dedicated rayon pool (None uses the global pool)
    pub threads: Option<usize>,

    /// Fixed number of decimal places in the output (None writes the shortest form)
    pub precision: Option<usize>,

    /// Handling of NaN and infinite input values
    pub non_finite: NonFinitePolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            precision: None,
            non_finite: NonFinitePolicy::PassThrough,
        }
    }
}

impl TransformConfig {
    /// Library options equivalent to this config.
    pub fn to_options(&self) -> TransformOptions {
        TransformOptions::new()
            .parallel(self.parallel)
            .precision(self.precision)
            .non_finite(self.non_finite)
    }
}
