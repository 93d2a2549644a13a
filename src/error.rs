//! Error types for schemadoc
//!
//! Every failure in this crate is an authoring mistake in a schema
//! declaration: a malformed annotation, a prototype the engine cannot
//! describe, a duplicate reference. None of them are retryable, so callers
//! at startup should propagate them immediately.

use thiserror::Error;

/// The main error type for schemadoc
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Annotation Errors
    // ============================================================================
    #[error("Invalid doc tag, content={content}")]
    MalformedTag { content: String },

    #[error("Field '{field}' directive '{directive}' value '{value}' is invalid: {message}")]
    InvalidDirectiveArgument {
        field: String,
        directive: String,
        value: String,
        message: String,
    },

    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("Prototype of type {type_name} should have one or more elements in a sequence")]
    EmptySample { type_name: String },

    #[error("Prototype of type {type_name} is not supported")]
    UnsupportedPrototype { type_name: String },

    #[error("Prototype of type {type_name} is an empty indirection, supply a populated value")]
    EmptyIndirection { type_name: String },

    // ============================================================================
    // Reference Table Errors
    // ============================================================================
    #[error("Reference key={key} already exists")]
    DuplicateReference { key: String },

    #[error("Reference key={key} used by '{directive}' must be {expected}")]
    ReferenceType {
        key: String,
        directive: String,
        expected: &'static str,
    },

    // ============================================================================
    // Document Errors
    // ============================================================================
    #[error("Parameter '{name}' has no schema, call schema() before enum_values()")]
    MissingParameterSchema { name: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed tag error
    pub fn malformed_tag(content: impl Into<String>) -> Self {
        Self::MalformedTag {
            content: content.into(),
        }
    }

    /// Create an invalid directive argument error
    pub fn invalid_argument(
        field: impl Into<String>,
        directive: impl Into<String>,
        value: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::InvalidDirectiveArgument {
            field: field.into(),
            directive: directive.into(),
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Create an empty sample error
    pub fn empty_sample(type_name: impl Into<String>) -> Self {
        Self::EmptySample {
            type_name: type_name.into(),
        }
    }

    /// Create an unsupported prototype error
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedPrototype {
            type_name: type_name.into(),
        }
    }

    /// Create an empty indirection error
    pub fn empty_indirection(type_name: impl Into<String>) -> Self {
        Self::EmptyIndirection {
            type_name: type_name.into(),
        }
    }

    /// Create a duplicate reference error
    pub fn duplicate_reference(key: impl Into<String>) -> Self {
        Self::DuplicateReference { key: key.into() }
    }

    /// Create a reference type mismatch error
    pub fn reference_type(
        key: impl Into<String>,
        directive: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::ReferenceType {
            key: key.into(),
            directive: directive.into(),
            expected,
        }
    }

    /// Create a missing parameter schema error
    pub fn missing_parameter_schema(name: impl Into<String>) -> Self {
        Self::MissingParameterSchema { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error comes from a schema declaration (as opposed to I/O
    /// or config file handling)
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedTag { .. }
                | Error::InvalidDirectiveArgument { .. }
                | Error::EmptySample { .. }
                | Error::UnsupportedPrototype { .. }
                | Error::EmptyIndirection { .. }
                | Error::DuplicateReference { .. }
                | Error::ReferenceType { .. }
                | Error::MissingParameterSchema { .. }
        )
    }
}

/// Result type alias for schemadoc
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed_tag("desc(oops");
        assert_eq!(err.to_string(), "Invalid doc tag, content=desc(oops");

        let err = Error::duplicate_reference("#Desc");
        assert_eq!(err.to_string(), "Reference key=#Desc already exists");

        let err = Error::invalid_argument("Age", "minimum", "abc", "invalid float literal");
        assert_eq!(
            err.to_string(),
            "Field 'Age' directive 'minimum' value 'abc' is invalid: invalid float literal"
        );
    }

    #[test]
    fn test_is_declaration_error() {
        assert!(Error::empty_sample("Vec<String>").is_declaration_error());
        assert!(Error::unsupported("()").is_declaration_error());
        assert!(Error::reference_type("#E", "enum", "a list").is_declaration_error());

        assert!(!Error::config("bad").is_declaration_error());
        assert!(!Error::FileNotFound {
            path: "x.yaml".into()
        }
        .is_declaration_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
