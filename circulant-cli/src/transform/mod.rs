//! Transform command - text matrix to block-circulant text matrix.

use anyhow::{Context, Result};
use circulant_transform::circulant_transform_with;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::common::load_config;
use crate::common::runtime::run_in_pool;
use crate::config::transform_config::TransformConfig;

/// Name of the template written by `--generate-config`.
pub const CONFIG_TEMPLATE_NAME: &str = "transform_config.json";

/// Write a config template with default values to the current directory.
pub fn generate_config_template() -> Result<()> {
    let config = TransformConfig::default();
    let json = serde_json::to_string_pretty(&config)?;
    fs::write(CONFIG_TEMPLATE_NAME, json)
        .with_context(|| format!("Failed to write {}", CONFIG_TEMPLATE_NAME))?;

    println!("=== Generated {} ===", CONFIG_TEMPLATE_NAME);
    println!("\nEdit the config, then run:");
    println!("  circulant <INPUT> <OUTPUT> <K> --config {}", CONFIG_TEMPLATE_NAME);

    Ok(())
}

/// Run the transform on `input`, writing the circulant matrix to `output`.
pub fn run(input: &str, output: &str, k: usize, config_path: Option<&str>) -> Result<()> {
    let config: TransformConfig = load_config(config_path)?;
    let options = config.to_options();

    info!(input, output, k, ?config, "starting transform");

    let job = || {
        circulant_transform_with(Path::new(input), Path::new(output), k, &options)
            .with_context(|| format!("Failed to transform {} with k = {}", input, k))
    };

    match config.threads {
        Some(threads) => run_in_pool(threads, job)?,
        None => job()?,
    }

    println!("done");
    Ok(())
}
