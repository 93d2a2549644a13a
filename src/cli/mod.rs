//! CLI module
//!
//! Command-line interface for inspecting annotations and inferring schemas.
//!
//! # Commands
//!
//! - `tag` - Parse an annotation string
//! - `infer` - Infer a schema from a JSON sample
//! - `config` - Show or validate the configuration file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
