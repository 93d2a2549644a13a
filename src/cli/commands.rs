//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Schema inference and annotation tooling
#[derive(Parser, Debug)]
#[command(name = "schemadoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an annotation string and print its directives
    Tag {
        /// Annotation text, e.g. "required desc(user name)"
        text: String,
    },

    /// Infer a schema from a JSON sample
    Infer {
        /// Sample file (JSON)
        #[arg(short, long)]
        sample: Option<PathBuf>,

        /// Inline sample JSON
        #[arg(long)]
        sample_json: Option<String>,
    },

    /// Show or validate the configuration
    Config {
        /// Only validate, printing a summary
        #[arg(long)]
        check: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// YAML
    Yaml,
    /// Indented JSON
    Pretty,
}
