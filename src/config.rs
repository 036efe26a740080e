//! Configuration for batch generation
//!
//! A project file lists every entity to generate, where its samples live,
//! and where the output goes.
//!
//! ```yaml
//! output_dir: src/types
//! backup_old_file: true
//! conflict_policy: first_wins
//! log_level: debug
//! entities:
//!   - name: User
//!     samples: [samples/user-1.json, samples/user-2.json]
//!   - name: Order
//!     file_name: orders
//!     samples: [samples/orders.jsonl]
//!     inline:
//!       - { id: 1, lines: [] }
//! ```

use crate::error::{Error, Result};
use crate::generator::{GeneratorOptions, DEFAULT_HEADER};
use crate::loader::{load_samples, split_top_level_arrays};
use crate::output::OutputTarget;
use crate::schema::ConflictPolicy;
use crate::types::{JsonValue, LogLevel, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Project Config
// ============================================================================

/// Complete project configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Default directory for generated files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Back up existing files before overwriting
    #[serde(default)]
    pub backup_old_file: bool,

    /// Header comment for generated files
    #[serde(default)]
    pub header: Option<String>,

    /// How to treat samples that disagree on a field's shape
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,

    /// Log level for `run` and `validate`, unless given on the command line
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    /// Entities to generate
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ProjectConfig {
    /// Generator options shared by every entity
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions::new()
            .with_header(
                self.header
                    .clone()
                    .unwrap_or_else(|| DEFAULT_HEADER.to_string()),
            )
            .with_conflict_policy(self.conflict_policy)
    }

    /// Output target for one entity
    pub fn target_for(&self, entity: &EntityConfig) -> OutputTarget {
        let dir = entity
            .output_dir
            .clone()
            .unwrap_or_else(|| self.output_dir.clone());
        let backup = entity.backup_old_file.unwrap_or(self.backup_old_file);
        let mut target = OutputTarget::new(dir).with_backup(backup);
        if let Some(file_name) = entity.file_name.clone().none_if_empty() {
            target = target.with_file_name(file_name);
        }
        target
    }

    /// Find an entity by name
    pub fn entity(&self, name: &str) -> Option<&EntityConfig> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Resolve relative paths against `base`
    fn resolve_paths(&mut self, base: &Path) {
        self.output_dir = resolve(base, &self.output_dir);
        for entity in &mut self.entities {
            entity.samples = entity.samples.iter().map(|p| resolve(base, p)).collect();
            entity.output_dir = entity.output_dir.as_ref().map(|p| resolve(base, p));
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

// ============================================================================
// Entity Config
// ============================================================================

/// One entity to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Root interface name
    pub name: String,

    /// Output file name (defaults to the capitalized entity name)
    #[serde(default)]
    pub file_name: Option<String>,

    /// Sample files or directories
    #[serde(default)]
    pub samples: Vec<PathBuf>,

    /// Samples written directly in the config
    #[serde(default)]
    pub inline: Vec<JsonValue>,

    /// Treat a top-level array in a sample file as a list of samples
    #[serde(default)]
    pub split_arrays: bool,

    /// Per-entity output directory
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Per-entity backup override
    #[serde(default)]
    pub backup_old_file: Option<bool>,
}

impl EntityConfig {
    /// Load every sample for this entity: files first, then inline samples
    pub fn load_variations(&self) -> Result<Vec<JsonValue>> {
        let mut variations = Vec::new();
        for path in &self.samples {
            variations.extend(load_samples(path)?);
        }
        if self.split_arrays {
            variations = split_top_level_arrays(variations);
        }
        variations.extend(self.inline.iter().cloned());
        Ok(variations)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a project config from a YAML file
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_config(path: impl AsRef<Path>) -> Result<ProjectConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        }
    })?;

    let mut config = load_config_from_str(&content)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.resolve_paths(base);
    Ok(config)
}

/// Load a project config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<ProjectConfig> {
    let config: ProjectConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a project config
fn validate_config(config: &ProjectConfig) -> Result<()> {
    if config.entities.is_empty() {
        return Err(Error::config("Config must list at least one entity"));
    }

    let names: HashSet<_> = config.entities.iter().map(|e| &e.name).collect();
    if names.len() != config.entities.len() {
        return Err(Error::config("Duplicate entity names found"));
    }

    for entity in &config.entities {
        validate_entity(entity)?;
    }

    Ok(())
}

/// Validate an entity definition
fn validate_entity(entity: &EntityConfig) -> Result<()> {
    if entity.name.trim().is_empty() {
        return Err(Error::invalid_config("name", "Entity name cannot be empty"));
    }

    if entity.samples.is_empty() && entity.inline.is_empty() {
        return Err(Error::invalid_config(
            format!("entities.{}.samples", entity.name),
            "Entity needs at least one sample file or inline sample",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    const MINIMAL: &str = r"
entities:
  - name: User
    inline:
      - { id: 1 }
";

    #[test]
    fn test_defaults() {
        let config = load_config_from_str(MINIMAL).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.backup_old_file);
        assert_eq!(config.conflict_policy, ConflictPolicy::FirstWins);
        assert_eq!(config.log_level, None);
        assert_eq!(config.generator_options().header, DEFAULT_HEADER);
    }

    #[test]
    fn test_log_level() {
        let config = load_config_from_str(&format!("log_level: debug\n{MINIMAL}")).unwrap();
        assert_eq!(config.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_rejects_no_entities() {
        let err = load_config_from_str("output_dir: out\n").unwrap_err();
        assert!(err.to_string().contains("at least one entity"));
    }

    #[test]
    fn test_rejects_duplicate_entities() {
        let yaml = r"
entities:
  - { name: User, inline: [{ id: 1 }] }
  - { name: User, inline: [{ id: 2 }] }
";
        let err = load_config_from_str(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate entity names"));
    }

    #[test]
    fn test_rejects_entity_without_samples() {
        let err = load_config_from_str("entities:\n  - name: User\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "entities.User.samples"
        ));
    }

    #[test]
    fn test_rejects_blank_entity_name() {
        let err = load_config_from_str("entities:\n  - { name: ' ', inline: [{}] }\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = load_config_from_str("entities: [").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_target_for_entity() {
        let yaml = r"
output_dir: types
backup_old_file: true
entities:
  - { name: user, inline: [{}] }
  - { name: order, file_name: orders.ts, output_dir: other, backup_old_file: false, inline: [{}] }
  - { name: empty, file_name: '', inline: [{}] }
";
        let config = load_config_from_str(yaml).unwrap();

        let user = config.target_for(config.entity("user").unwrap());
        assert!(user.is_backup_enabled());
        assert_eq!(user.resolve_path("user").unwrap(), Path::new("types/User.ts"));

        let order = config.target_for(config.entity("order").unwrap());
        assert!(!order.is_backup_enabled());
        assert_eq!(order.resolve_path("order").unwrap(), Path::new("other/orders.ts"));

        let empty = config.target_for(config.entity("empty").unwrap());
        assert_eq!(empty.resolve_path("empty").unwrap(), Path::new("types/Empty.ts"));
    }

    #[test]
    fn test_header_and_policy_flow_into_options() {
        let yaml = r"
header: '// custom'
conflict_policy: reject
entities:
  - { name: User, inline: [{}] }
";
        let options = load_config_from_str(yaml).unwrap().generator_options();
        assert_eq!(options.header, "// custom");
        assert_eq!(options.conflict_policy, ConflictPolicy::Reject);
    }

    #[test]
    fn test_load_config_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("samples")).unwrap();
        fs::write(
            dir.path().join("samples/list.json"),
            r#"[{"id": 1}, {"id": 2, "name": "b"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("project.yaml"),
            r"
output_dir: out
entities:
  - name: User
    samples: [samples/list.json]
    split_arrays: true
    inline:
      - { id: 3, active: true }
",
        )
        .unwrap();

        let config = load_config(dir.path().join("project.yaml")).unwrap();
        assert_eq!(config.output_dir, dir.path().join("out"));

        let entity = config.entity("User").unwrap();
        assert_eq!(entity.samples, vec![dir.path().join("samples/list.json")]);
        assert_eq!(
            entity.load_variations().unwrap(),
            vec![
                json!({"id": 1}),
                json!({"id": 2, "name": "b"}),
                json!({"id": 3, "active": true}),
            ]
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/no/such/project.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
