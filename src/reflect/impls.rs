//! `Reflect` implementations for std, serde_json and chrono types

use super::types::{Field, FileHeader, Kind, Reflect, StructValue, TypeInfo, Typed, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Primitives
// ============================================================================

macro_rules! impl_primitive {
    ($($ty:ty => $kind:ident, |$v:ident| $value:expr;)*) => {
        $(
            impl Typed for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::$kind)
                }
            }

            impl Reflect for $ty {
                fn type_info(&self) -> TypeInfo {
                    <Self as Typed>::type_info()
                }

                fn reflect(&self) -> Value<'_> {
                    let $v = self;
                    $value
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool, |v| Value::Bool(*v);
    isize => Int, |v| Value::Int(*v as i64);
    i8 => Int8, |v| Value::Int(i64::from(*v));
    i16 => Int16, |v| Value::Int(i64::from(*v));
    i32 => Int32, |v| Value::Int(i64::from(*v));
    i64 => Int64, |v| Value::Int(*v);
    usize => Uint, |v| Value::Uint(*v as u64);
    u8 => Uint8, |v| Value::Uint(u64::from(*v));
    u16 => Uint16, |v| Value::Uint(u64::from(*v));
    u32 => Uint32, |v| Value::Uint(u64::from(*v));
    u64 => Uint64, |v| Value::Uint(*v);
    // Go through the shortest decimal form so 1.1f32 documents as 1.1
    f32 => Float32, |v| Value::Float(v.to_string().parse().unwrap_or(f64::from(*v)));
    f64 => Float64, |v| Value::Float(*v);
    char => String, |v| Value::String(Cow::Owned(v.to_string()));
    String => String, |v| Value::String(Cow::Borrowed(v.as_str()));
}

impl Typed for &str {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<str>(Kind::String)
    }
}

impl Reflect for &str {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(*self))
    }
}

// ============================================================================
// Indirections
// ============================================================================

macro_rules! impl_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Reflect + Typed> Typed for $ptr<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::pointer::<Self>(<T as Typed>::type_info())
                }
            }

            impl<T: Reflect + Typed> Reflect for $ptr<T> {
                fn type_info(&self) -> TypeInfo {
                    <Self as Typed>::type_info()
                }

                fn reflect(&self) -> Value<'_> {
                    Value::Pointer(Some(&**self))
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::pointer::<Self>(<T as Typed>::type_info())
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Pointer(self.as_ref().map(|v| v as &dyn Reflect))
    }
}

// ============================================================================
// Sequences
// ============================================================================

macro_rules! impl_sequence {
    ($($seq:ident),*) => {
        $(
            impl<T: Reflect + Typed + 'static> Typed for $seq<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::Sequence)
                }
            }

            impl<T: Reflect + Typed + 'static> Reflect for $seq<T> {
                fn type_info(&self) -> TypeInfo {
                    <Self as Typed>::type_info()
                }

                fn reflect(&self) -> Value<'_> {
                    Value::Sequence(self.iter().map(|v| v as &dyn Reflect).collect())
                }
            }
        )*
    };
}

impl_sequence!(Vec, VecDeque, BTreeSet);

impl<T: Reflect + Typed + 'static, S: 'static> Typed for HashSet<T, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Sequence)
    }
}

impl<T: Reflect + Typed + 'static, S: 'static> Reflect for HashSet<T, S> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Sequence(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<T: Reflect + Typed + 'static, const N: usize> Typed for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Sequence)
    }
}

impl<T: Reflect + Typed + 'static, const N: usize> Reflect for [T; N] {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Sequence(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

// ============================================================================
// Maps
// ============================================================================

impl<K: Display + 'static, V: Reflect + Typed + 'static, S: 'static> Typed for HashMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map)
    }
}

impl<K: Display + 'static, V: Reflect + Typed + 'static, S: 'static> Reflect for HashMap<K, V, S> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<K: Display + 'static, V: Reflect + Typed + 'static> Typed for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map)
    }
}

impl<K: Display + 'static, V: Reflect + Typed + 'static> Reflect for BTreeMap<K, V> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Reflect))
                .collect(),
        )
    }
}

// ============================================================================
// serde_json
// ============================================================================

impl Typed for serde_json::Value {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Dynamic)
    }
}

impl Reflect for serde_json::Value {
    fn type_info(&self) -> TypeInfo {
        let kind = match self {
            serde_json::Value::Null => Kind::Dynamic,
            serde_json::Value::Bool(_) => Kind::Bool,
            serde_json::Value::Number(n) if n.is_i64() => Kind::Int64,
            serde_json::Value::Number(n) if n.is_u64() => Kind::Uint64,
            serde_json::Value::Number(_) => Kind::Float64,
            serde_json::Value::String(_) => Kind::String,
            serde_json::Value::Array(_) => Kind::Sequence,
            serde_json::Value::Object(_) => Kind::Map,
        };
        TypeInfo::of::<Self>(kind)
    }

    fn reflect(&self) -> Value<'_> {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::String(Cow::Borrowed(s)),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.iter().map(|v| v as &dyn Reflect).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), v as &dyn Reflect))
                    .collect(),
            ),
        }
    }
}

impl Typed for serde_json::Map<String, serde_json::Value> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map)
    }
}

impl Reflect for serde_json::Map<String, serde_json::Value> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v as &dyn Reflect))
                .collect(),
        )
    }
}

// ============================================================================
// chrono
// ============================================================================

// Timestamps travel as strings on the wire, so they document as strings.
macro_rules! impl_timestamp {
    ($($ty:ty => |$v:ident| $render:expr;)*) => {
        $(
            impl Typed for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::String)
                }
            }

            impl Reflect for $ty {
                fn type_info(&self) -> TypeInfo {
                    <Self as Typed>::type_info()
                }

                fn reflect(&self) -> Value<'_> {
                    let $v = self;
                    Value::String(Cow::Owned($render))
                }
            }
        )*
    };
}

impl_timestamp! {
    chrono::DateTime<chrono::Utc> => |v| v.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true);
    chrono::DateTime<chrono::FixedOffset> => |v| v.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true);
    chrono::NaiveDate => |v| v.format("%Y-%m-%d").to_string();
    chrono::NaiveDateTime => |v| v.format("%Y-%m-%dT%H:%M:%S").to_string();
}

// ============================================================================
// File Upload Marker
// ============================================================================

impl Typed for FileHeader {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Struct)
    }
}

impl Reflect for FileHeader {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Struct(StructValue::new(vec![
            Field::new("filename", &self.filename),
            Field::new("size", &self.size),
            Field::new("content_type", &self.content_type),
        ]))
    }
}
