//! Configuration types
//!
//! Settings that tune how prototypes are read and which references are
//! available, loadable from YAML:
//!
//! ```yaml
//! tags:
//!   annotation: doc
//!   names: [json, form]
//! references:
//!   "#DescErrorCode": machine readable error code
//!   "#EnumStatus": [active, disabled]
//! document:
//!   title: Users API
//!   version: "1.0"
//! ```

use crate::error::{Error, Result};
use crate::refs::{RefValue, References, ReferencesBuilder};
use crate::schema::SchemaBuilder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Field tag keys
    #[serde(default)]
    pub tags: TagKeys,

    /// Reference table entries
    #[serde(default)]
    pub references: BTreeMap<String, RefValue>,

    /// API document metadata
    #[serde(default)]
    pub document: Option<DocumentInfo>,
}

impl SchemaConfig {
    /// Register the configured references into a fresh builder
    pub fn references(&self) -> Result<ReferencesBuilder> {
        let mut builder = References::builder();
        builder.define_all(
            self.references
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        )?;
        Ok(builder)
    }

    /// Create a schema builder from this configuration
    pub fn schema_builder(&self) -> Result<SchemaBuilder> {
        let refs = self.references()?.build();
        Ok(SchemaBuilder::new(refs).with_tags(self.tags.clone()))
    }
}

// ============================================================================
// Tag Keys
// ============================================================================

/// Which field tags carry annotations and wire names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagKeys {
    /// Tag holding the annotation string
    #[serde(default = "default_annotation")]
    pub annotation: String,

    /// Naming tags, probed in order
    #[serde(default = "default_names")]
    pub names: Vec<String>,
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            annotation: default_annotation(),
            names: default_names(),
        }
    }
}

fn default_annotation() -> String {
    "doc".to_string()
}

fn default_names() -> Vec<String> {
    vec!["json".to_string(), "form".to_string()]
}

// ============================================================================
// Document Info
// ============================================================================

/// API document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// API title
    pub title: String,

    /// API version
    #[serde(default = "default_version")]
    pub version: String,

    /// API description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

// ============================================================================
// Loading
// ============================================================================

/// Load a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<SchemaConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load a configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<SchemaConfig> {
    let config: SchemaConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a configuration
fn validate_config(config: &SchemaConfig) -> Result<()> {
    let tags = &config.tags;

    if tags.annotation.is_empty() {
        return Err(Error::config("Annotation tag key cannot be empty"));
    }

    if tags.names.is_empty() {
        return Err(Error::config("At least one naming tag key is required"));
    }

    if tags.names.iter().any(String::is_empty) {
        return Err(Error::config("Naming tag keys cannot be empty"));
    }

    let unique: HashSet<_> = tags.names.iter().collect();
    if unique.len() != tags.names.len() {
        return Err(Error::config("Duplicate naming tag keys found"));
    }

    if tags.names.contains(&tags.annotation) {
        return Err(Error::config(format!(
            "Tag key '{}' cannot be both a naming and the annotation tag",
            tags.annotation
        )));
    }

    if let Some(document) = &config.document {
        if document.title.is_empty() {
            return Err(Error::config("Document title cannot be empty"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config.tags, TagKeys::default());
        assert_eq!(config.tags.annotation, "doc");
        assert_eq!(config.tags.names, vec!["json", "form"]);
        assert!(config.references.is_empty());
        assert!(config.document.is_none());
    }

    #[test]
    fn test_full_config() {
        let yaml = r##"
tags:
  annotation: schema
  names: [wire]
references:
  "#Desc": shared description
  "#Enum": [a, b]
document:
  title: Users API
  description: Manage users
"##;
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config.tags.annotation, "schema");
        assert_eq!(config.tags.names, vec!["wire"]);

        let refs = config.references().unwrap().build();
        assert_eq!(refs.text("#Desc", "desc").unwrap(), Some("shared description"));
        assert_eq!(refs.list("#Enum", "enum").unwrap().map(<[_]>::len), Some(2));

        let document = config.document.unwrap();
        assert_eq!(document.title, "Users API");
        assert_eq!(document.version, "1.0");
        assert_eq!(document.description.as_deref(), Some("Manage users"));
    }

    #[test]
    fn test_invalid_tags() {
        let err = load_config_from_str("tags:\n  annotation: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("Annotation tag key cannot be empty"));

        let err = load_config_from_str("tags:\n  names: []\n").unwrap_err();
        assert!(err.to_string().contains("At least one naming tag"));

        let err = load_config_from_str("tags:\n  names: [json, json]\n").unwrap_err();
        assert!(err.to_string().contains("Duplicate naming tag keys"));

        let err = load_config_from_str("tags:\n  annotation: json\n").unwrap_err();
        assert!(err.to_string().contains("cannot be both"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = load_config_from_str("tags: [").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "references:\n  \"#A\": text").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.references.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
