//! Document types

use super::operation::Operation;
use crate::config::DocumentInfo;
use crate::error::{Error, Result};
use crate::schema::SchemaNode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// OpenAPI version written into every document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Matches `:name` path segments
static PATH_PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/:([^/]+)").unwrap());

/// Rewrite `:name` path segments to OpenAPI `{name}` templates
pub fn openapi_path(path: &str) -> String {
    PATH_PARAM_REGEX.replace_all(path, "/{${1}}").into_owned()
}

// ============================================================================
// HTTP Methods
// ============================================================================

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// All supported methods
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Other(format!("Unsupported HTTP method: {s}")))
    }
}

// ============================================================================
// Document
// ============================================================================

/// API metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// OpenAPI 3.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    /// OpenAPI version
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Path items keyed by OpenAPI path template
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

impl ApiDocument {
    /// Create an empty document
    pub fn new(
        description: impl Into<String>,
        version: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: title.into(),
                description: description.into(),
                version: version.into(),
            },
            paths: BTreeMap::new(),
        }
    }

    /// Create an empty document from configured metadata
    pub fn from_info(info: &DocumentInfo) -> Self {
        Self::new(
            info.description.clone().unwrap_or_default(),
            info.version.as_str(),
            info.title.as_str(),
        )
    }

    /// Start documenting `method` on `path`
    ///
    /// `:name` segments become `{name}`. The path item is shared by every
    /// method on the same path; a method documented twice keeps only the
    /// latest operation.
    pub fn operation(&mut self, method: HttpMethod, path: &str) -> &mut Operation {
        let path = openapi_path(path);
        debug!("Documenting {} {}", method, path);

        let item = self.paths.entry(path).or_default();
        item.slot_mut(method).insert(Operation::default())
    }

    /// Look up a documented operation
    pub fn get_operation(&self, method: HttpMethod, path: &str) -> Option<&Operation> {
        self.paths.get(&openapi_path(path))?.operation(method)
    }

    /// Number of documented operations
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(PathItem::len).sum()
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

// ============================================================================
// Path Items
// ============================================================================

/// Operations available on one path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Operation for a method
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    fn slot_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    /// Number of documented methods
    pub fn len(&self) -> usize {
        HttpMethod::ALL
            .into_iter()
            .filter(|m| self.operation(*m).is_some())
            .count()
    }

    /// Check whether no method is documented
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Media Types
// ============================================================================

/// Schema for one content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: SchemaNode,
}

impl MediaType {
    /// Media type with a schema
    pub fn new(schema: SchemaNode) -> Self {
        Self { schema }
    }
}
