// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # schemadoc
//!
//! Type-driven JSON schema inference. Describe a request or response once as
//! a Rust struct, annotate its fields, and get the schema (and an OpenAPI
//! document around it) from a sample value.
//!
//! ## Features
//!
//! - **Annotation Language**: `required desc(...) pattern(...) enum(a;b)`
//!   and numeric bounds, parsed by [`parse_tag`]
//! - **Schema Inference**: strings, integers, numbers, booleans, maps,
//!   sequences and structs, with embedded structs flattened
//! - **Reference Table**: shared descriptions, patterns and enum lists
//! - **OpenAPI Documents**: operations, parameters, bodies and responses
//!
//! ## Quick Start
//!
//! ```rust
//! use schemadoc::{prototype, References, SchemaBuilder};
//!
//! #[derive(Default)]
//! struct CreateUser {
//!     name: String,
//!     status: String,
//! }
//!
//! prototype!(CreateUser {
//!     name: [json = "name", doc = "required desc(user name) maxLength(64)"],
//!     status: [json = "status", doc = "enum(#EnumStatus)"],
//! });
//!
//! let mut refs = References::builder();
//! refs.define("#EnumStatus", vec!["active", "disabled"])?;
//!
//! let schema = SchemaBuilder::new(refs.build()).infer(&CreateUser::default())?;
//! assert_eq!(schema.required, vec!["name"]);
//! # Ok::<(), schemadoc::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌───────────┐   ┌────────────────┐   ┌─────────────┐
//! │ prototype │──▶│  reflect  │──▶│ SchemaBuilder  │──▶│ SchemaNode  │
//! └───────────┘   │ classify  │   │  tag ▸ refs    │   └──────┬──────┘
//!                 └───────────┘   └────────────────┘          │
//!                                                      ┌──────▼──────┐
//!                                                      │ ApiDocument │
//!                                                      └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Annotation tag parsing
pub mod tag;

/// Runtime reflection of prototypes
pub mod reflect;

/// Shared reference table
pub mod refs;

/// Schema inference from prototypes
pub mod schema;

/// Configuration loading
pub mod config;

/// OpenAPI document assembly
pub mod document;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result, ResultExt};

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, SchemaConfig, TagKeys};
pub use document::ApiDocument;
pub use reflect::{FileHeader, Reflect};
pub use refs::{References, ReferencesBuilder};
pub use schema::{example_of, infer_schema, SchemaBuilder, SchemaNode, SchemaType};
pub use tag::{parse_tag, Directive, DirectiveKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
