//! Annotation tag module
//!
//! Parses the compact annotation language attached to struct fields:
//!
//! ```text
//! nullable required desc(user name) pattern(^[a-z]+$) enum(a;b;c)
//! ```
//!
//! # Grammar
//!
//! - Directives are separated by spaces
//! - A directive is a bare key (`required`) or `key(value)`
//! - A bare key must be followed by a space unless it is the whole
//!   annotation: `desc(x) required` is malformed, `required desc(x)` is not
//! - Parentheses inside a value may nest; `\(` and `\)` produce literal
//!   parentheses without affecting nesting
//!
//! The parser does not check the vocabulary; see [`DirectiveKind`] for the
//! keys the schema builder understands.

mod parser;
mod types;

pub use parser::parse_tag;
pub use types::{Directive, DirectiveKind};
