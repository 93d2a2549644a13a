//! OpenAPI document assembly
//!
//! Collects operations, parameters, request bodies and responses into an
//! OpenAPI 3.0 document whose schemas are inferred from prototypes.
//!
//! # Example
//!
//! ```
//! use schemadoc::document::{ApiDocument, HttpMethod, Parameter, Response};
//! use schemadoc::SchemaBuilder;
//!
//! let builder = SchemaBuilder::default();
//! let mut doc = ApiDocument::new("User management", "1.0", "Users API");
//!
//! doc.operation(HttpMethod::Get, "/users/:id")
//!     .tag("users")
//!     .summary("Fetch a user")
//!     .parameter(Parameter::path("id").schema(&builder, &"42").unwrap())
//!     .response("200", Response::text("ok"), "success");
//!
//! assert!(doc.paths.contains_key("/users/{id}"));
//! ```

mod operation;
mod types;

pub use operation::{Operation, Parameter, ParameterLocation, RequestBody, Response};
pub use types::{openapi_path, ApiDocument, HttpMethod, Info, MediaType, PathItem};

#[cfg(test)]
mod tests;
