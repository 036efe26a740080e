//! Sample loader module
//!
//! Reads sample documents from disk.
//!
//! # Overview
//!
//! The loader module provides:
//! - `SampleFormat` - Supported file formats (JSON, JSON Lines, YAML)
//! - `load_samples` - Load one file or every supported file in a directory
//! - `load_samples_from_str` - Parse samples from an in-memory string

mod parser;
mod types;

pub use parser::{load_samples, load_samples_from_str, split_top_level_arrays};
pub use types::SampleFormat;
