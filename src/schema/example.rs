//! Example extraction
//!
//! Renders a prototype as the JSON value it would serialize to, for the
//! `example` attribute of generated schemas.

use crate::reflect::{deref, Field, Reflect, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// Naming tag used when rendering struct examples
const JSON_TAG: &str = "json";

/// Render a prototype as a JSON value
///
/// Struct fields are keyed by their `json` tag name, or by identifier when
/// untagged; fields tagged `-` are left out and embedded fields are
/// flattened (or dropped when empty). An empty indirection renders as
/// `null`. Returns `None` only
/// when a float is not representable in JSON (NaN, infinity).
pub fn example_of(prototype: &dyn Reflect) -> Option<JsonValue> {
    match deref(prototype).value {
        Some(value) => example_from_value(value),
        None => Some(JsonValue::Null),
    }
}

/// Render an already extracted value as a JSON value
pub fn example_from_value(value: Value<'_>) -> Option<JsonValue> {
    Some(match value {
        Value::String(s) => JsonValue::String(s.into_owned()),
        Value::Int(n) => JsonValue::from(n),
        Value::Uint(n) => JsonValue::from(n),
        Value::Float(n) => JsonValue::Number(Number::from_f64(n)?),
        Value::Bool(b) => JsonValue::Bool(b),
        Value::Null => JsonValue::Null,
        Value::Pointer(target) => match target {
            Some(target) => example_of(target)?,
            None => JsonValue::Null,
        },
        Value::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(|item| example_of(item).unwrap_or(JsonValue::Null))
                .collect(),
        ),
        Value::Map(entries) => JsonValue::Object(
            entries
                .into_iter()
                .map(|(key, item)| (key, example_of(item).unwrap_or(JsonValue::Null)))
                .collect(),
        ),
        Value::Struct(s) => {
            let mut object = Map::new();
            write_fields(&mut object, s.fields);
            JsonValue::Object(object)
        }
    })
}

fn write_fields(object: &mut Map<String, JsonValue>, fields: Vec<Field<'_>>) {
    for field in fields {
        if field.embedded {
            match deref(field.value).value {
                Some(Value::Struct(inner)) => {
                    write_fields(object, inner.fields);
                    continue;
                }
                None => continue,
                Some(_) => {}
            }
        }

        let key = match field.tags.get(JSON_TAG) {
            Some(tag) if tag == "-" => continue,
            Some(_) => field.tags.name(JSON_TAG).unwrap_or(field.name),
            None => field.name,
        };
        let value = example_of(field.value).unwrap_or(JsonValue::Null);
        object.insert(key.to_string(), value);
    }
}
