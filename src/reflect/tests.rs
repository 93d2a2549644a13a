//! Reflection and kind extraction tests

use super::*;
use crate::{prototype, reflect_newtype};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use test_case::test_case;

struct TypeString(String);
reflect_newtype!(TypeString => String);

struct TypeInt(isize);
reflect_newtype!(TypeInt => isize);

struct TypeBool(bool);
reflect_newtype!(TypeBool => bool);

#[derive(Default)]
struct Inner {
    name: String,
}

prototype!(Inner {
    name: [json = "name", doc = "required"],
});

#[derive(Default)]
struct Outer {
    inner: Inner,
    id: i64,
    secret: String,
}

prototype!(Outer {
    ..inner,
    id: [json = "id,omitempty", form = "id"],
    secret,
});

fn string_of(value: Option<Value<'_>>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.into_owned()),
        _ => None,
    }
}

#[test]
fn test_extract_string() {
    let t1 = "test".to_string();
    let out = extract_string(&t1).unwrap();
    assert_eq!(string_of(out.value), Some("test".into()));

    let t2 = Box::new(t1.clone());
    let out2 = extract_string(&t2).unwrap();
    assert_eq!(string_of(out2.value), Some("test".into()));

    let t3 = TypeString("test".into());
    let out3 = extract_string(&t3).unwrap();
    assert!(out3.ty.is::<TypeString>());
    assert_eq!(string_of(out3.value), Some("test".into()));

    let t4 = "borrowed";
    assert_eq!(string_of(extract_string(&t4).unwrap().value), Some("borrowed".into()));
}

#[test]
fn test_extract_integer() {
    let t1: i64 = 1;
    let out = extract_integer(&t1).unwrap();
    assert_eq!(out.ty.kind, Kind::Int64);
    assert!(matches!(out.value, Some(Value::Int(1))));

    let t2 = Some(t1);
    let out2 = extract_integer(&t2).unwrap();
    assert!(matches!(out2.value, Some(Value::Int(1))));

    let t3 = TypeInt(1);
    let out3 = extract_integer(&t3).unwrap();
    assert_eq!(out3.ty.kind, Kind::Int);
    assert!(out3.ty.is::<TypeInt>());
    assert!(matches!(out3.value, Some(Value::Int(1))));
}

#[test]
fn test_extract_boolean() {
    let t1 = true;
    assert!(matches!(
        extract_boolean(&t1).unwrap().value,
        Some(Value::Bool(true))
    ));

    let t2 = Rc::new(true);
    assert!(matches!(
        extract_boolean(&t2).unwrap().value,
        Some(Value::Bool(true))
    ));

    let t3 = TypeBool(true);
    assert!(matches!(
        extract_boolean(&t3).unwrap().value,
        Some(Value::Bool(true))
    ));
}

#[test]
fn test_extract_struct() {
    let t1 = Inner::default();
    assert!(extract_struct(&t1).is_some());

    let t2 = Arc::new(Inner::default());
    assert!(extract_struct(&t2).is_some());
}

#[test]
fn test_extract_mismatch_is_none() {
    assert!(extract_string(&1i32).is_none());
    assert!(extract_integer(&1.5f64).is_none());
    assert!(extract_number(&7u8).is_none());
    assert!(extract_boolean(&"true").is_none());
    assert!(extract_struct(&vec![1, 2]).is_none());
    assert!(extract(&HashMap::<String, i32>::new(), Kind::Sequence).is_none());
}

#[test]
fn test_empty_indirection_keeps_target_type() {
    let empty: Option<String> = None;
    let out = extract_string(&empty).unwrap();
    assert_eq!(out.ty.kind, Kind::String);
    assert!(out.value.is_none());

    let nested: Option<Box<i32>> = None;
    let out = extract_integer(&nested).unwrap();
    assert_eq!(out.ty.kind, Kind::Int32);
    assert!(out.value.is_none());
}

#[test]
fn test_pointer_type_info_chain() {
    let info = <Option<Box<i32>> as Typed>::type_info();
    assert_eq!(info.kind, Kind::Pointer);
    assert!(info.is::<i32>());

    let boxed = info.elem.unwrap();
    assert_eq!(boxed.kind, Kind::Pointer);
    assert_eq!(boxed.elem.unwrap().kind, Kind::Int32);

    let shared = Rc::new(Some(TypeBool(true)));
    assert_eq!(Reflect::type_info(&shared).kind, Kind::Pointer);
    assert!(extract_boolean(&shared).is_some());
}

#[test]
fn test_nested_indirection() {
    let nested = Some(Box::new(Arc::new(3.5f64)));
    let out = extract_number(&nested).unwrap();
    assert!(matches!(out.value, Some(Value::Float(f)) if (f - 3.5).abs() < f64::EPSILON));
}

#[test]
fn test_extract_file_header() {
    let file = FileHeader::new("a.png", 10);
    assert!(extract_file_header(&file).is_some());
    assert!(extract_file_header(&Some(file)).is_some());
    assert!(extract_file_header(&Inner::default()).is_none());
}

#[test_case(&"s".to_string(), SemanticKind::String ; "string")]
#[test_case(&'c', SemanticKind::String ; "char")]
#[test_case(&1isize, SemanticKind::Integer ; "isize")]
#[test_case(&1i8, SemanticKind::Integer ; "i8")]
#[test_case(&1i16, SemanticKind::Integer ; "i16")]
#[test_case(&1i32, SemanticKind::Integer ; "i32")]
#[test_case(&1i64, SemanticKind::Integer ; "i64")]
#[test_case(&1u32, SemanticKind::Integer ; "u32")]
#[test_case(&1.0f32, SemanticKind::Float ; "f32")]
#[test_case(&1.0f64, SemanticKind::Float ; "f64")]
#[test_case(&false, SemanticKind::Boolean ; "bool")]
#[test_case(&BTreeMap::<String, i32>::new(), SemanticKind::Map ; "btree map")]
#[test_case(&vec!["a".to_string()], SemanticKind::Sequence ; "vec")]
#[test_case(&[1, 2, 3], SemanticKind::Sequence ; "array")]
#[test_case(&Inner::default(), SemanticKind::Struct ; "struct")]
#[test_case(&FileHeader::default(), SemanticKind::FileUpload ; "file header")]
#[test_case(&serde_json::Value::Null, SemanticKind::Unsupported ; "json null")]
fn test_classify(value: &dyn Reflect, expected: SemanticKind) {
    assert_eq!(classify(value).kind, expected);
}

#[test]
fn test_classify_json_values() {
    let value = serde_json::json!({"a": [1, 2], "b": 1.5, "c": "x", "d": true});
    assert_eq!(classify(&value).kind, SemanticKind::Map);
    assert_eq!(classify(&value["a"]).kind, SemanticKind::Sequence);
    assert_eq!(classify(&value["a"][0]).kind, SemanticKind::Integer);
    assert_eq!(classify(&value["b"]).kind, SemanticKind::Float);
    assert_eq!(classify(&value["c"]).kind, SemanticKind::String);
    assert_eq!(classify(&value["d"]).kind, SemanticKind::Boolean);
}

#[test]
fn test_prototype_fields() {
    let outer = Outer {
        inner: Inner {
            name: "n".into(),
        },
        id: 4,
        secret: "s".into(),
    };

    let Value::Struct(s) = outer.reflect() else {
        panic!("expected a struct value");
    };
    assert_eq!(s.fields.len(), 3);

    assert_eq!(s.fields[0].name, "inner");
    assert!(s.fields[0].embedded);

    assert_eq!(s.fields[1].name, "id");
    assert!(!s.fields[1].embedded);
    assert_eq!(s.fields[1].tags.get("json"), Some("id,omitempty"));
    assert_eq!(s.fields[1].tags.name("json"), Some("id"));
    assert_eq!(s.fields[1].tags.get("doc"), None);

    assert_eq!(s.fields[2].name, "secret");
    assert!(s.fields[2].tags.is_empty());
}

#[test]
fn test_tag_names() {
    let mut tags = Tags::default();
    tags.insert("json", "-");
    tags.insert("form", ",omitempty");
    assert_eq!(tags.name("json"), None);
    assert_eq!(tags.name("form"), None);
    assert_eq!(tags.name("xml"), None);

    tags.insert("form", "user_name");
    assert_eq!(tags.name("form"), Some("user_name"));
}
