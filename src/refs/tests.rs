//! Reference table tests

use super::*;
use crate::error::Error;
use serde_json::json;

#[test]
fn test_define_and_lookup() {
    let mut builder = References::builder();
    builder
        .define("#DescTest2Field", "test2 field")
        .unwrap()
        .define("#EnumTest2Field", vec!["val3", "val4"])
        .unwrap();
    let refs = builder.build();

    assert_eq!(refs.len(), 2);
    assert_eq!(
        refs.get("#DescTest2Field"),
        Some(&RefValue::Text("test2 field".into()))
    );
    assert_eq!(
        refs.get("#EnumTest2Field"),
        Some(&RefValue::List(vec![json!("val3"), json!("val4")]))
    );
    assert!(refs.get("#Missing").is_none());
}

#[test]
fn test_duplicate_key_fails() {
    let mut builder = References::builder();
    builder.define("#Desc", "first").unwrap();

    let err = builder.define("#Desc", "second").unwrap_err();
    assert!(matches!(err, Error::DuplicateReference { ref key } if key == "#Desc"));

    // The first registration is untouched
    let refs = builder.build();
    assert_eq!(refs.get("#Desc").and_then(RefValue::as_text), Some("first"));
}

#[test]
fn test_define_all_stops_at_duplicate() {
    let mut builder = References::builder();
    let err = builder
        .define_all([("#A", "a"), ("#B", "b"), ("#A", "again")])
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateReference { .. }));
}

#[test]
fn test_typed_lookup() {
    let mut builder = References::builder();
    builder
        .define("#Text", "hello")
        .unwrap()
        .define("#List", vec![json!(1), json!("two")])
        .unwrap();
    let refs = builder.build();

    assert_eq!(refs.text("#Text", "desc").unwrap(), Some("hello"));
    assert_eq!(
        refs.list("#List", "enum").unwrap(),
        Some(&[json!(1), json!("two")][..])
    );
    assert_eq!(refs.text("#Nope", "desc").unwrap(), None);
    assert_eq!(refs.list("#Nope", "enum").unwrap(), None);

    let err = refs.text("#List", "pattern").unwrap_err();
    assert!(matches!(
        err,
        Error::ReferenceType { ref key, ref directive, expected: "a string" }
            if key == "#List" && directive == "pattern"
    ));
    assert!(refs.list("#Text", "enum").is_err());
}

#[test]
fn test_shared_across_threads() {
    let mut builder = References::builder();
    builder.define("#Desc", "shared").unwrap();
    let refs = builder.build();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let refs = refs.clone();
            std::thread::spawn(move || refs.text("#Desc", "desc").unwrap().map(str::to_string))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some("shared".to_string()));
    }
}

#[test]
fn test_keys_sorted() {
    let mut builder = References::builder();
    builder.define_all([("#B", "b"), ("#A", "a")]).unwrap();
    assert_eq!(builder.build().keys(), vec!["#A", "#B"]);
}

#[test]
fn test_ref_value_deserialize() {
    let text: RefValue = serde_yaml::from_str("\"some text\"").unwrap();
    assert_eq!(text, RefValue::Text("some text".into()));

    let list: RefValue = serde_yaml::from_str("[a, b, 3]").unwrap();
    assert_eq!(list, RefValue::List(vec![json!("a"), json!("b"), json!(3)]));
}
