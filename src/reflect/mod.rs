//! Reflection module
//!
//! A small runtime view of Rust values, enough to infer a schema from a
//! prototype.
//!
//! # Overview
//!
//! - [`Reflect`] / [`Typed`] - exposes a value and its static type
//! - [`Value`] - borrowed view of strings, numbers, maps, sequences, structs
//!   and indirections
//! - [`classify`] - resolves indirection and picks a [`SemanticKind`]
//! - [`prototype!`](crate::prototype) - implements `Reflect` for structs,
//!   with per-field tags (`json`, `form`, `doc`)

mod impls;
mod kind;
mod macros;
mod types;

pub use kind::{
    classify, deref, extract, extract_boolean, extract_file_header, extract_integer,
    extract_number, extract_string, extract_struct, Classified, Extracted, SemanticKind,
};
pub use types::{Field, FileHeader, Kind, Reflect, StructValue, Tags, TypeInfo, Typed, Value};

#[cfg(test)]
mod tests;
