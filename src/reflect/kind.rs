//! Kind extraction
//!
//! Unwraps indirection and matches a value against representation kinds.

use super::types::{FileHeader, Kind, Reflect, TypeInfo, Value};
use std::fmt;

/// Integer kinds in probe order
const INTEGER_KINDS: [Kind; 10] = [
    Kind::Int,
    Kind::Int8,
    Kind::Int16,
    Kind::Int32,
    Kind::Int64,
    Kind::Uint,
    Kind::Uint8,
    Kind::Uint16,
    Kind::Uint32,
    Kind::Uint64,
];

/// Floating point kinds in probe order
const FLOAT_KINDS: [Kind; 2] = [Kind::Float32, Kind::Float64];

/// A value with its indirection removed
#[derive(Debug)]
pub struct Extracted<'a> {
    /// Underlying type
    pub ty: TypeInfo,
    /// Underlying value; `None` when the indirection was empty
    pub value: Option<Value<'a>>,
}

/// Semantic kind of a prototype, as used by the schema builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticKind {
    FileUpload,
    String,
    Integer,
    Float,
    Boolean,
    Map,
    Sequence,
    Struct,
    Unsupported,
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticKind::FileUpload => "file upload",
            SemanticKind::String => "string",
            SemanticKind::Integer => "integer",
            SemanticKind::Float => "float",
            SemanticKind::Boolean => "boolean",
            SemanticKind::Map => "map",
            SemanticKind::Sequence => "sequence",
            SemanticKind::Struct => "struct",
            SemanticKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// A classified prototype
#[derive(Debug)]
pub struct Classified<'a> {
    pub kind: SemanticKind,
    pub ty: TypeInfo,
    pub value: Option<Value<'a>>,
}

/// Remove every level of indirection from a value
///
/// An empty indirection still yields the type it points at, with no value.
pub fn deref(value: &dyn Reflect) -> Extracted<'_> {
    let mut ty = value.type_info();
    let mut current = Some(value.reflect());

    while ty.kind == Kind::Pointer {
        match current {
            Some(Value::Pointer(Some(target))) => {
                ty = target.type_info();
                current = Some(target.reflect());
            }
            _ => {
                let Some(elem) = ty.elem.take() else {
                    break;
                };
                ty = *elem;
                current = None;
            }
        }
    }

    Extracted { ty, value: current }
}

/// Match a value against one representation kind
///
/// Matching is structural: a newtype over `i64` matches [`Kind::Int64`].
/// Returns `None` when the kinds differ.
pub fn extract(value: &dyn Reflect, kind: Kind) -> Option<Extracted<'_>> {
    let extracted = deref(value);
    (extracted.ty.kind == kind).then_some(extracted)
}

/// Match a value against the multipart file-upload marker
pub fn extract_file_header(value: &dyn Reflect) -> Option<Extracted<'_>> {
    extract(value, Kind::Struct).filter(|e| is_file_header(&e.ty))
}

/// Match a value against any string kind
pub fn extract_string(value: &dyn Reflect) -> Option<Extracted<'_>> {
    extract(value, Kind::String)
}

/// Match a value against any integer kind
pub fn extract_integer(value: &dyn Reflect) -> Option<Extracted<'_>> {
    let extracted = deref(value);
    INTEGER_KINDS
        .contains(&extracted.ty.kind)
        .then_some(extracted)
}

/// Match a value against any floating point kind
pub fn extract_number(value: &dyn Reflect) -> Option<Extracted<'_>> {
    let extracted = deref(value);
    FLOAT_KINDS.contains(&extracted.ty.kind).then_some(extracted)
}

/// Match a value against the boolean kind
pub fn extract_boolean(value: &dyn Reflect) -> Option<Extracted<'_>> {
    extract(value, Kind::Bool)
}

/// Match a value against the struct kind
pub fn extract_struct(value: &dyn Reflect) -> Option<Extracted<'_>> {
    extract(value, Kind::Struct)
}

/// Classify a prototype
///
/// Kinds are probed in a fixed order and the first match wins: file upload,
/// string, integers, floats, boolean, map, sequence, struct.
pub fn classify(value: &dyn Reflect) -> Classified<'_> {
    let Extracted { ty, value } = deref(value);
    Classified {
        kind: semantic_kind(&ty),
        ty,
        value,
    }
}

fn semantic_kind(ty: &TypeInfo) -> SemanticKind {
    let kind = ty.kind;
    if kind == Kind::Struct && is_file_header(ty) {
        SemanticKind::FileUpload
    } else if kind == Kind::String {
        SemanticKind::String
    } else if INTEGER_KINDS.contains(&kind) {
        SemanticKind::Integer
    } else if FLOAT_KINDS.contains(&kind) {
        SemanticKind::Float
    } else if kind == Kind::Bool {
        SemanticKind::Boolean
    } else if kind == Kind::Map {
        SemanticKind::Map
    } else if kind == Kind::Sequence {
        SemanticKind::Sequence
    } else if kind == Kind::Struct {
        SemanticKind::Struct
    } else {
        SemanticKind::Unsupported
    }
}

fn is_file_header(ty: &TypeInfo) -> bool {
    ty.is::<FileHeader>()
}
