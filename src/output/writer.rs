//! TypeScript file writer
//!
//! Writes generated interface text to disk, optionally keeping a
//! timestamped copy of whatever was there before.

use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of generated files
const TS_EXTENSION: &str = ".ts";

/// Where generated text should be written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    file_name: Option<String>,
    backup_old_file: bool,
}

impl OutputTarget {
    /// Create a target writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: None,
            backup_old_file: false,
        }
    }

    /// Use a fixed file name instead of deriving one from the entity name
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Keep a timestamped backup of an existing file before overwriting it
    #[must_use]
    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.backup_old_file = enabled;
        self
    }

    /// Output directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether old files are backed up
    #[must_use]
    pub fn is_backup_enabled(&self) -> bool {
        self.backup_old_file
    }

    /// Full path of the file for `entity`
    ///
    /// `file_name` has any `.ts` suffix stripped and re-added; without one the
    /// entity name with its first letter capitalized is used.
    pub fn resolve_path(&self, entity: &str) -> Result<PathBuf> {
        if self.dir.as_os_str().is_empty() {
            return Err(Error::output("No output directory specified"));
        }

        let stem = match &self.file_name {
            Some(name) => name.strip_suffix(TS_EXTENSION).unwrap_or(name.as_str()).to_string(),
            None => capitalize_first(entity),
        };
        if stem.is_empty() {
            return Err(Error::output(format!(
                "Cannot derive an output file name for entity '{entity}'"
            )));
        }

        Ok(self.dir.join(format!("{stem}{TS_EXTENSION}")))
    }
}

/// Outcome of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// File that was written
    pub path: PathBuf,
    /// Backup of the previous contents, if one was made
    pub backup: Option<PathBuf>,
    /// Number of bytes written
    pub bytes_written: usize,
}

/// Write generated text for `entity` to its target file
pub fn write_interfaces(
    target: &OutputTarget,
    entity: &str,
    contents: &str,
) -> Result<WriteReport> {
    write_interfaces_at(target, entity, contents, Utc::now())
}

/// Same as [`write_interfaces`] with an explicit clock, for backup names
pub fn write_interfaces_at(
    target: &OutputTarget,
    entity: &str,
    contents: &str,
    now: DateTime<Utc>,
) -> Result<WriteReport> {
    let path = target.resolve_path(entity)?;

    fs::create_dir_all(target.dir()).map_err(|e| {
        Error::output(format!(
            "Failed to create output directory '{}': {e}",
            target.dir().display()
        ))
    })?;

    let backup = if target.is_backup_enabled() && path.exists() {
        let backup = backup_path(&path, now);
        fs::copy(&path, &backup).map_err(|e| {
            Error::output(format!("Failed to back up '{}': {e}", path.display()))
        })?;
        tracing::info!("Backed up {} to {}", path.display(), backup.display());
        Some(backup)
    } else {
        None
    };

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents).map_err(|e| {
        Error::output(format!("Failed to write '{}': {e}", temp_path.display()))
    })?;
    if let Err(e) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::output(format!(
            "Failed to rename '{}' to '{}': {e}",
            temp_path.display(),
            path.display()
        )));
    }

    tracing::info!("Generated interfaces for {} in {}", entity, path.display());
    Ok(WriteReport {
        path,
        backup,
        bytes_written: contents.len(),
    })
}

/// Backup location for `path`: `<path>.<timestamp>.bak`
///
/// The timestamp is RFC 3339 UTC with millisecond precision, with `-`, `:`
/// and `.` replaced by `_`.
pub fn backup_path(path: &Path, now: DateTime<Utc>) -> PathBuf {
    let timestamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(['-', ':', '.'], "_");

    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{timestamp}.bak"));
    PathBuf::from(name)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
