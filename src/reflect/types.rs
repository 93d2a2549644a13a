//! Reflection types

use std::any::{type_name, TypeId};
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// Kinds and Type Descriptors
// ============================================================================

/// Representation kind of a type, independent of its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    /// Pointer-sized signed integer
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Pointer-sized unsigned integer
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Map,
    Sequence,
    Struct,
    /// Indirection (`Option`, `Box`, `&`, `Rc`, `Arc`)
    Pointer,
    /// Kind only known from the value, e.g. `serde_json::Value`
    Dynamic,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Map => "map",
            Kind::Sequence => "sequence",
            Kind::Struct => "struct",
            Kind::Pointer => "pointer",
            Kind::Dynamic => "dynamic",
        };
        f.write_str(name)
    }
}

/// Static description of a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Full type name, for error messages
    pub name: &'static str,
    /// Identity of the type; for indirections, the identity of the target
    pub id: TypeId,
    /// Representation kind
    pub kind: Kind,
    /// Target type of an indirection
    pub elem: Option<Box<TypeInfo>>,
}

impl TypeInfo {
    /// Describe `T` with the given representation kind
    pub fn of<T: ?Sized + 'static>(kind: Kind) -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
            kind,
            elem: None,
        }
    }

    /// Describe an indirection `P` pointing at `elem`
    pub fn pointer<P: ?Sized>(elem: TypeInfo) -> Self {
        Self {
            name: type_name::<P>(),
            id: elem.id,
            kind: Kind::Pointer,
            elem: Some(Box::new(elem)),
        }
    }

    /// Re-label this description as the named type `T`, keeping its kind
    #[must_use]
    pub fn named<T: ?Sized + 'static>(mut self) -> Self {
        self.name = type_name::<T>();
        self.id = TypeId::of::<T>();
        self
    }

    /// Check whether this describes exactly the type `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

// ============================================================================
// Reflection Traits
// ============================================================================

/// Types whose shape is known without a value
///
/// Needed so an empty indirection (`None`) can still report what it points
/// at.
pub trait Typed {
    /// Describe the type
    fn type_info() -> TypeInfo;
}

/// A value the schema builder can walk
///
/// Implemented for primitives, collections, indirections,
/// `serde_json::Value` and chrono timestamps. Structs implement it with
/// [`prototype!`](crate::prototype), newtypes with
/// [`reflect_newtype!`](crate::reflect_newtype).
pub trait Reflect {
    /// Describe the type of this value
    fn type_info(&self) -> TypeInfo;

    /// Expose the value
    fn reflect(&self) -> Value<'_>;
}

// ============================================================================
// Values
// ============================================================================

/// A borrowed view of a reflected value
pub enum Value<'a> {
    String(Cow<'a, str>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    /// Entries with their keys rendered as strings
    Map(Vec<(String, &'a dyn Reflect)>),
    Sequence(Vec<&'a dyn Reflect>),
    Struct(StructValue<'a>),
    /// Target of an indirection; `None` when empty
    Pointer(Option<&'a dyn Reflect>),
    Null,
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(&entries.len()).finish(),
            Value::Sequence(items) => f.debug_tuple("Sequence").field(&items.len()).finish(),
            Value::Struct(s) => f.debug_tuple("Struct").field(s).finish(),
            Value::Pointer(target) => f.debug_tuple("Pointer").field(&target.is_some()).finish(),
            Value::Null => f.write_str("Null"),
        }
    }
}

/// Declared fields of a struct value, in declaration order
#[derive(Debug, Default)]
pub struct StructValue<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> StructValue<'a> {
    /// Create a struct value from its fields
    pub fn new(fields: Vec<Field<'a>>) -> Self {
        Self { fields }
    }
}

/// One declared struct field
pub struct Field<'a> {
    /// Field identifier
    pub name: &'static str,
    /// Field tags such as `json`, `form` and `doc`
    pub tags: Tags,
    /// Embedded (anonymous) field whose members belong to the parent
    pub embedded: bool,
    /// Field value
    pub value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    /// Create a named field
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            name,
            tags: Tags::default(),
            embedded: false,
            value,
        }
    }

    /// Create an embedded field
    pub fn embedded(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            embedded: true,
            ..Self::new(name, value)
        }
    }

    /// Attach a tag
    #[must_use]
    pub fn tag(mut self, key: &'static str, value: &'static str) -> Self {
        self.tags.insert(key, value);
        self
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("embedded", &self.embedded)
            .field("type", &self.value.type_info().name)
            .finish()
    }
}

/// Key/value tags attached to a field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<(&'static str, &'static str)>);

impl Tags {
    /// Set a tag, replacing any earlier value for the key
    pub fn insert(&mut self, key: &'static str, value: &'static str) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Get a tag value; `None` when the tag is absent
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Name part of a naming tag (before the first `,`); `None` when the
    /// tag is absent, empty or `-`
    pub fn name(&self, key: &str) -> Option<&'static str> {
        let name = self.get(key)?.split(',').next().unwrap_or_default();
        (!name.is_empty() && name != "-").then_some(name)
    }

    /// Check whether no tags are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// File Upload Marker
// ============================================================================

/// A file part of a multipart form
///
/// Fields of this type are documented as `string` with `format: binary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHeader {
    /// Client-supplied file name
    pub filename: String,
    /// Size in bytes
    pub size: i64,
    /// Declared content type
    pub content_type: Option<String>,
}

impl FileHeader {
    /// Create a file header
    pub fn new(filename: impl Into<String>, size: i64) -> Self {
        Self {
            filename: filename.into(),
            size,
            content_type: None,
        }
    }
}
