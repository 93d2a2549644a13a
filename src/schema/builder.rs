//! Schema inference from prototypes

use super::example::example_from_value;
use super::types::{SchemaNode, SchemaType};
use crate::config::TagKeys;
use crate::error::{Error, Result};
use crate::reflect::{classify, extract_struct, Classified, Field, Kind, Reflect, SemanticKind, Value};
use crate::refs::References;
use crate::tag::{parse_tag, Directive, DirectiveKind};
use std::str::FromStr;
use tracing::{debug, trace};

/// Schema builder bound to a reference table
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    /// References for `desc`, `pattern` and `enum` arguments
    refs: References,
    /// Tag keys to read from struct fields
    tags: TagKeys,
}

impl SchemaBuilder {
    /// Create a builder using the given reference table
    pub fn new(refs: References) -> Self {
        Self {
            refs,
            tags: TagKeys::default(),
        }
    }

    /// Read annotations and wire names from different tag keys
    #[must_use]
    pub fn with_tags(mut self, tags: TagKeys) -> Self {
        self.tags = tags;
        self
    }

    /// The reference table this builder resolves against
    pub fn references(&self) -> &References {
        &self.refs
    }

    /// Infer the schema of a prototype
    ///
    /// Fails if the prototype (or any annotated field) has no supported kind,
    /// holds an empty sequence or empty struct indirection, or carries a
    /// malformed annotation.
    pub fn infer(&self, prototype: &dyn Reflect) -> Result<SchemaNode> {
        self.infer_value(prototype)?
            .ok_or_else(|| Error::unsupported(prototype.type_info().name))
    }

    /// Infer a schema, or `None` for a value that has no shape (JSON `null`)
    fn infer_value(&self, prototype: &dyn Reflect) -> Result<Option<SchemaNode>> {
        let Classified { kind, ty, value } = classify(prototype);

        let node = match kind {
            SemanticKind::FileUpload => SchemaNode::string().with_format("binary"),
            SemanticKind::String => leaf(SchemaType::String, value),
            SemanticKind::Integer => leaf(SchemaType::Integer, value),
            SemanticKind::Float => leaf(SchemaType::Number, value),
            SemanticKind::Boolean => leaf(SchemaType::Boolean, value),
            SemanticKind::Map => leaf(SchemaType::Object, value),
            SemanticKind::Sequence => {
                let first = match value {
                    Some(Value::Sequence(items)) => items.first().copied(),
                    _ => None,
                };
                let Some(first) = first else {
                    return Err(Error::empty_sample(ty.name));
                };
                match self.infer_value(first)? {
                    Some(items) => SchemaNode::array(items),
                    None => SchemaNode::new(SchemaType::Array),
                }
            }
            SemanticKind::Struct => match value {
                Some(Value::Struct(s)) => self.infer_struct(s.fields)?,
                _ => return Err(Error::empty_indirection(ty.name)),
            },
            SemanticKind::Unsupported if ty.kind == Kind::Dynamic => return Ok(None),
            SemanticKind::Unsupported => return Err(Error::unsupported(ty.name)),
        };

        Ok(Some(node))
    }

    fn infer_struct(&self, fields: Vec<Field<'_>>) -> Result<SchemaNode> {
        let mut object = SchemaNode::object();

        for field in fields {
            if field.embedded {
                if let Some(embedded) = extract_struct(field.value) {
                    if embedded.value.is_none() {
                        debug!("Skipping empty embedded field {}", field.name);
                        continue;
                    }
                    debug!("Flattening embedded field {}", field.name);
                    let inner = self.infer(field.value)?;
                    object.absorb(inner);
                    continue;
                }
            }

            let Some(name) = self.wire_name(&field) else {
                debug!("Skipping field {} without a wire name", field.name);
                continue;
            };

            let annotation = field.tags.get(&self.tags.annotation);
            let Some(annotation) = annotation.filter(|a| !a.is_empty()) else {
                debug!("Skipping field {} without a {} tag", field.name, self.tags.annotation);
                continue;
            };

            let Some(mut property) = self.infer_value(field.value)? else {
                debug!("Skipping field {} without a shape", field.name);
                continue;
            };

            for directive in parse_tag(annotation)? {
                self.apply(&mut object, &mut property, &field, name, &directive)?;
            }

            object.add_property(name, property);
        }

        Ok(object)
    }

    /// First non-suppressed naming tag of a field
    fn wire_name(&self, field: &Field<'_>) -> Option<&'static str> {
        self.tags.names.iter().find_map(|key| field.tags.name(key))
    }

    /// Apply one directive to a field's schema (or, for `required`, to its
    /// parent object)
    fn apply(
        &self,
        parent: &mut SchemaNode,
        property: &mut SchemaNode,
        field: &Field<'_>,
        name: &str,
        directive: &Directive,
    ) -> Result<()> {
        let Some(kind) = directive.kind() else {
            trace!("Ignoring unknown directive {} on {}", directive.key, field.name);
            return Ok(());
        };
        trace!("Applying {} to {}", directive, field.name);

        let arg = directive.value.as_str();
        match kind {
            DirectiveKind::Required => parent.add_required(name),
            DirectiveKind::Nullable => property.nullable = true,
            DirectiveKind::Format => property.format = Some(arg.to_string()),
            DirectiveKind::Pattern => {
                let pattern = self.refs.text(arg, kind.key())?.unwrap_or(arg);
                property.pattern = Some(pattern.to_string());
            }
            DirectiveKind::Description => {
                let description = self.refs.text(arg, kind.key())?.unwrap_or(arg);
                property.description = Some(description.to_string());
            }
            DirectiveKind::Enum => {
                let values = match self.refs.list(arg, kind.key())? {
                    Some(values) => values.to_vec(),
                    None => arg
                        .split(';')
                        .map(|v| serde_json::Value::String(v.to_string()))
                        .collect(),
                };
                property.enum_values = Some(values);
            }
            DirectiveKind::MinItems => property.min_items = Some(parse_arg(field, directive)?),
            DirectiveKind::MaxItems => property.max_items = Some(parse_arg(field, directive)?),
            DirectiveKind::MinLength => property.min_length = Some(parse_arg(field, directive)?),
            DirectiveKind::MaxLength => property.max_length = Some(parse_arg(field, directive)?),
            DirectiveKind::Minimum => property.minimum = Some(parse_bound(field, directive)?),
            DirectiveKind::Maximum => property.maximum = Some(parse_bound(field, directive)?),
        }

        Ok(())
    }
}

fn leaf(schema_type: SchemaType, value: Option<Value<'_>>) -> SchemaNode {
    let mut node = SchemaNode::new(schema_type);
    node.example = value.and_then(example_from_value);
    node
}

fn parse_arg<T>(field: &Field<'_>, directive: &Directive) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    directive
        .value
        .parse()
        .map_err(|e| Error::invalid_argument(field.name, &directive.key, &directive.value, e))
}

/// Numeric bound; `NaN` and infinities have no JSON representation
fn parse_bound(field: &Field<'_>, directive: &Directive) -> Result<f64> {
    let bound: f64 = parse_arg(field, directive)?;
    if bound.is_finite() {
        Ok(bound)
    } else {
        Err(Error::invalid_argument(
            field.name,
            &directive.key,
            &directive.value,
            "bound must be a finite number",
        ))
    }
}

/// Infer a schema with an empty reference table (convenience function)
pub fn infer_schema(prototype: &dyn Reflect) -> Result<SchemaNode> {
    SchemaBuilder::default().infer(prototype)
}
