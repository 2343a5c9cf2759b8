//! Configuration files for the circulant CLI.

pub mod transform_config;
