//! Reference table module
//!
//! Named values shared by many field annotations, so a description, pattern
//! or enum list is written once:
//!
//! ```
//! use schemadoc::refs::References;
//!
//! let mut builder = References::builder();
//! builder
//!     .define("#DescErrorCode", "machine readable error code")?
//!     .define("#EnumStatus", vec!["active", "disabled"])?;
//! let refs = builder.build();
//!
//! assert!(refs.contains("#EnumStatus"));
//! # Ok::<(), schemadoc::Error>(())
//! ```
//!
//! Keys are write-once: defining a key twice is an error. The built table is
//! immutable and cheap to clone across threads.

mod table;

pub use table::{RefValue, References, ReferencesBuilder};

#[cfg(test)]
mod tests;
