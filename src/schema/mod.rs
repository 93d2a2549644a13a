//! Schema inference module
//!
//! Infers a JSON schema from a prototype value and the annotations on its
//! fields.
//!
//! # Features
//!
//! - **Type Inference**: strings, integers, numbers, booleans, maps
//! - **Array Item Inference**: items inferred from the first element
//! - **Struct Flattening**: embedded struct fields merge into the parent
//! - **Annotations**: `required`, `format`, `pattern`, `desc`, `enum`,
//!   `nullable` and numeric bounds
//! - **References**: `desc`, `pattern` and `enum` arguments resolve against
//!   a shared [`References`](crate::refs::References) table
//! - **Examples**: leaf values become the schema's `example`

mod builder;
mod example;
mod types;

pub use builder::{infer_schema, SchemaBuilder};
pub use example::{example_from_value, example_of};
pub use types::{SchemaNode, SchemaType};
