//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, SchemaConfig};
use crate::error::{Error, Result};
use crate::tag::parse_tag;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output
    pub fn run(&self) -> Result<()> {
        let output = self.render()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its formatted output
    pub fn render(&self) -> Result<String> {
        let result = match &self.cli.command {
            Commands::Tag { text } => self.tag(text)?,
            Commands::Infer {
                sample,
                sample_json,
            } => self.infer(sample.as_deref(), sample_json.as_deref())?,
            Commands::Config { check } => self.config(*check)?,
        };
        self.format(&result)
    }

    /// Load configuration, or the defaults when no file is given
    fn load_config(&self) -> Result<SchemaConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                load_config(path)
            }
            None => Ok(SchemaConfig::default()),
        }
    }

    /// Parse an annotation
    fn tag(&self, text: &str) -> Result<Value> {
        let directives: Vec<Value> = parse_tag(text)?
            .into_iter()
            .map(|d| {
                let known = d.kind().is_some();
                json!({
                    "key": d.key,
                    "value": d.value,
                    "known": known,
                })
            })
            .collect();

        Ok(json!({ "directives": directives }))
    }

    /// Infer a schema from a sample
    fn infer(&self, sample: Option<&Path>, inline: Option<&str>) -> Result<Value> {
        let content = match (inline, sample) {
            (Some(json_str), _) => json_str.to_string(),
            (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
                Error::config(format!(
                    "Failed to read sample file '{}': {e}",
                    path.display()
                ))
            })?,
            (None, None) => {
                return Err(Error::config(
                    "Sample not specified (use --sample or --sample-json)",
                ))
            }
        };

        let sample: Value = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid sample JSON: {e}")))?;

        let builder = self.load_config()?.schema_builder()?;
        let schema = builder.infer(&sample)?;
        info!("Inferred {} schema", schema.schema_type);

        Ok(schema.to_json())
    }

    /// Show or validate configuration
    fn config(&self, check: bool) -> Result<Value> {
        let config = self.load_config()?;
        let refs = config.references()?.build();

        if !check {
            return Ok(serde_json::to_value(&config)?);
        }

        Ok(json!({
            "valid": true,
            "annotation_tag": config.tags.annotation,
            "name_tags": config.tags.names,
            "references": refs.keys(),
            "document": config.document.as_ref().map(|d| &d.title),
        }))
    }

    /// Format a result in the selected output format
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        })
    }
}
