//! Operations and their parts

use super::types::MediaType;
use crate::error::{Error, Result};
use crate::reflect::Reflect;
use crate::schema::{example_of, SchemaBuilder, SchemaNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const CONTENT_JSON: &str = "application/json";
const CONTENT_MULTIPART: &str = "multipart/form-data";
const CONTENT_URLENCODED: &str = "application/x-www-form-urlencoded";
const CONTENT_TEXT: &str = "text/plain";
const CONTENT_CSV: &str = "text/csv";
const CONTENT_PDF: &str = "application/pdf";

// ============================================================================
// Operation
// ============================================================================

/// One documented HTTP operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
}

impl Operation {
    /// Add a grouping tag
    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the summary
    pub fn summary(&mut self, summary: impl Into<String>) -> &mut Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the description
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Add a parameter
    pub fn parameter(&mut self, parameter: Parameter) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the request body
    pub fn request_body(&mut self, body: RequestBody) -> &mut Self {
        self.request_body = Some(body);
        self
    }

    /// Set the response for a status code
    pub fn response(
        &mut self,
        code: impl Into<String>,
        mut response: Response,
        description: impl Into<String>,
    ) -> &mut Self {
        response.description = description.into();
        self.responses.insert(code.into(), response);
        self
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Where a parameter is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Header,
    Path,
    Query,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
        }
    }
}

/// A header, path or query parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaNode>,
}

impl Parameter {
    fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: true,
            schema: None,
        }
    }

    /// Required header parameter
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Header)
    }

    /// Required path parameter
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Path)
    }

    /// Required query parameter
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Query)
    }

    /// Set description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set whether the parameter is required
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Infer the parameter schema from a sample value
    pub fn schema(mut self, builder: &SchemaBuilder, sample: &dyn Reflect) -> Result<Self> {
        self.schema = Some(builder.infer(sample)?);
        Ok(self)
    }

    /// Restrict the parameter to a set of values
    ///
    /// Fails unless [`schema`](Self::schema) was called first.
    pub fn enum_values<I, V>(mut self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        let Some(schema) = self.schema.as_mut() else {
            return Err(Error::missing_parameter_schema(self.name));
        };
        schema.enum_values = Some(values.into_iter().map(Into::into).collect());
        Ok(self)
    }
}

// ============================================================================
// Bodies
// ============================================================================

/// Request body of an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content: BTreeMap<String, MediaType>,

    pub required: bool,
}

impl RequestBody {
    fn with_content(content_type: &str, schema: SchemaNode) -> Self {
        Self {
            description: None,
            content: BTreeMap::from([(content_type.to_string(), MediaType::new(schema))]),
            required: true,
        }
    }

    /// JSON body; a struct or map prototype becomes the schema example
    pub fn json(builder: &SchemaBuilder, prototype: &dyn Reflect) -> Result<Self> {
        Ok(Self::with_content(CONTENT_JSON, json_schema(builder, prototype)?))
    }

    /// `multipart/form-data` body
    pub fn multipart_form(builder: &SchemaBuilder, prototype: &dyn Reflect) -> Result<Self> {
        Ok(Self::with_content(CONTENT_MULTIPART, builder.infer(prototype)?))
    }

    /// `application/x-www-form-urlencoded` body
    pub fn urlencoded_form(builder: &SchemaBuilder, prototype: &dyn Reflect) -> Result<Self> {
        Ok(Self::with_content(CONTENT_URLENCODED, builder.infer(prototype)?))
    }

    /// Set description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set whether the body is required
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Response of an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,
}

impl Response {
    fn with_content(content_type: &str, schema: SchemaNode) -> Self {
        Self {
            description: String::new(),
            content: BTreeMap::from([(content_type.to_string(), MediaType::new(schema))]),
        }
    }

    /// JSON response; a struct or map prototype becomes the schema example
    pub fn json(builder: &SchemaBuilder, prototype: &dyn Reflect) -> Result<Self> {
        Ok(Self::with_content(CONTENT_JSON, json_schema(builder, prototype)?))
    }

    /// Plain text response with a sample body
    pub fn text(sample: &str) -> Self {
        Self::with_content(CONTENT_TEXT, text_schema(sample))
    }

    /// CSV response with a sample body
    pub fn csv(sample: &str) -> Self {
        Self::with_content(CONTENT_CSV, text_schema(sample))
    }

    /// PDF document response
    pub fn pdf() -> Self {
        Self::with_content(CONTENT_PDF, text_schema(""))
    }
}

fn json_schema(builder: &SchemaBuilder, prototype: &dyn Reflect) -> Result<SchemaNode> {
    let mut schema = builder.infer(prototype)?;
    if let Some(example @ serde_json::Value::Object(_)) = example_of(prototype) {
        schema.example = Some(example);
    }
    Ok(schema)
}

fn text_schema(sample: &str) -> SchemaNode {
    SchemaNode::string().with_example(serde_json::Value::String(sample.to_string()))
}
