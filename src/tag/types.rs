//! Directive types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `key(value)` pair parsed from an annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Directive key, e.g. `desc`
    pub key: String,
    /// Directive argument; empty for bare keys such as `required`
    pub value: String,
}

impl Directive {
    /// Create a directive
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a bare directive with an empty argument
    pub fn bare(key: impl Into<String>) -> Self {
        Self::new(key, "")
    }

    /// The recognized kind of this directive, if any
    pub fn kind(&self) -> Option<DirectiveKind> {
        DirectiveKind::from_key(&self.key)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}({})", self.key, self.value)
        }
    }
}

/// Directive keys understood by the schema builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Required,
    Format,
    Pattern,
    Description,
    Enum,
    Nullable,
    MinItems,
    MaxItems,
    Maximum,
    Minimum,
    MaxLength,
    MinLength,
}

impl DirectiveKind {
    /// All recognized directive kinds
    pub const ALL: [DirectiveKind; 12] = [
        DirectiveKind::Required,
        DirectiveKind::Format,
        DirectiveKind::Pattern,
        DirectiveKind::Description,
        DirectiveKind::Enum,
        DirectiveKind::Nullable,
        DirectiveKind::MinItems,
        DirectiveKind::MaxItems,
        DirectiveKind::Maximum,
        DirectiveKind::Minimum,
        DirectiveKind::MaxLength,
        DirectiveKind::MinLength,
    ];

    /// Look up a directive kind by its exact key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// The exact key used in annotations
    pub fn key(self) -> &'static str {
        match self {
            DirectiveKind::Required => "required",
            DirectiveKind::Format => "format",
            DirectiveKind::Pattern => "pattern",
            DirectiveKind::Description => "desc",
            DirectiveKind::Enum => "enum",
            DirectiveKind::Nullable => "nullable",
            DirectiveKind::MinItems => "minItems",
            DirectiveKind::MaxItems => "maxItems",
            DirectiveKind::Maximum => "maximum",
            DirectiveKind::Minimum => "minimum",
            DirectiveKind::MaxLength => "maxLength",
            DirectiveKind::MinLength => "minLength",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
