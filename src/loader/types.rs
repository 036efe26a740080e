//! Sample file formats

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format of a sample file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// One JSON document per file
    Json,
    /// One JSON document per non-blank line
    JsonLines,
    /// One YAML document per file
    Yaml,
}

impl SampleFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(SampleFormat::Json),
            "jsonl" | "ndjson" => Some(SampleFormat::JsonLines),
            "yaml" | "yml" => Some(SampleFormat::Yaml),
            _ => None,
        }
    }

    /// Detect the format from a path
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}
