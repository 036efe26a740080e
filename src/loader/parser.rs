//! Sample file parsing
//!
//! Supports single files and directories. Directory entries are read in
//! file-name order so runs are reproducible.

use crate::error::{Error, Result, ResultExt};
use crate::loader::types::SampleFormat;
use crate::types::JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

/// Load sample documents from a file or directory
///
/// # Examples
///
/// ```ignore
/// // One document
/// let samples = load_samples("samples/user.json")?;
///
/// // Every .json/.jsonl/.yaml file in a directory
/// let samples = load_samples("samples/users/")?;
/// ```
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<JsonValue>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Parse sample documents from a string in the given format
pub fn load_samples_from_str(content: &str, format: SampleFormat) -> Result<Vec<JsonValue>> {
    match format {
        SampleFormat::Json => Ok(vec![serde_json::from_str(content)?]),
        SampleFormat::JsonLines => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line)
                    .map_err(|e| Error::Other(format!("Invalid JSON on line {}: {e}", i + 1)))
            })
            .collect(),
        SampleFormat::Yaml => Ok(vec![serde_yaml::from_str(content)?]),
    }
}

/// Replace every top-level array with its elements
///
/// Useful when a sample file holds a list of records rather than one record.
pub fn split_top_level_arrays(samples: Vec<JsonValue>) -> Vec<JsonValue> {
    samples
        .into_iter()
        .flat_map(|sample| match sample {
            JsonValue::Array(items) => items,
            other => vec![other],
        })
        .collect()
}

fn load_file(path: &Path) -> Result<Vec<JsonValue>> {
    let format = SampleFormat::from_path(path).ok_or_else(|| {
        Error::sample_load(
            path.display().to_string(),
            "unsupported file extension (expected .json, .jsonl, .ndjson, .yaml or .yml)",
        )
    })?;

    let content = fs::read_to_string(path).map_err(|e| {
        Error::sample_load(
            path.display().to_string(),
            format!("failed to read file: {e}"),
        )
    })?;

    let samples = load_samples_from_str(&content, format)
        .with_context(|| format!("Failed to parse samples in '{}'", path.display()))?;
    tracing::debug!("Loaded {} sample(s) from {}", samples.len(), path.display());
    Ok(samples)
}

fn load_dir(dir: &Path) -> Result<Vec<JsonValue>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| {
            Error::sample_load(
                dir.display().to_string(),
                format!("failed to read directory: {e}"),
            )
        })?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && SampleFormat::from_path(p).is_some())
        .collect();
    files.sort();

    if files.is_empty() {
        tracing::warn!("No sample files found in {}", dir.display());
    }

    let mut samples = Vec::new();
    for file in &files {
        samples.extend(load_file(file)?);
    }
    Ok(samples)
}
