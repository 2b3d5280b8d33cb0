//! Configuration file support for mvn-dependency-tree.
//!
//! Provides YAML-based configuration through `mvn-dependency-tree.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "mvn-dependency-tree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Group-ID fragments whose entries are kept out of the report
    pub excluded_namespaces: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes as null rather than an empty mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Combines configured namespaces with those given on the command line.
///
/// Config entries come first; duplicates are dropped keeping first position.
pub fn merge_excluded_namespaces(config: Option<&ConfigFile>, cli: &[String]) -> Vec<String> {
    let configured = config
        .and_then(|c| c.excluded_namespaces.as_deref())
        .unwrap_or_default();

    let mut merged: Vec<String> = Vec::with_capacity(configured.len() + cli.len());
    for namespace in configured.iter().chain(cli) {
        if !merged.contains(namespace) {
            merged.push(namespace.clone());
        }
    }
    merged
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref namespaces) = config.excluded_namespaces {
        for (i, namespace) in namespaces.iter().enumerate() {
            if namespace.trim().is_empty() {
                bail!(
                    "Invalid config: excluded_namespaces[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a group-ID fragment (e.g., \"com.example.internal\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
