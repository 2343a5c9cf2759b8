//! Common utilities for the circulant CLI.

pub mod runtime;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;

/// Load a JSON config file, falling back to defaults when no path is given.
pub fn load_config<T: DeserializeOwned + Default>(config_path: Option<&str>) -> Result<T> {
    let Some(path) = config_path else {
        return Ok(T::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse config: {}", path))
}
