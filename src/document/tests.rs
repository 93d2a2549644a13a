//! Document assembly tests

use super::*;
use crate::error::Error;
use crate::prototype;
use crate::reflect::FileHeader;
use crate::schema::{SchemaBuilder, SchemaType};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

#[derive(Default)]
struct JsonResponse {
    field_one: String,
    field_two: bool,
}

prototype!(JsonResponse {
    field_one: [json = "field1", doc = "desc(example field one)"],
    field_two: [json = "field2", doc = "desc(example field 2)"],
});

#[derive(Default)]
struct UploadForm {
    title: String,
    file: FileHeader,
}

prototype!(UploadForm {
    title: [form = "title", doc = "required"],
    file: [form = "fileField", doc = "required desc(file to upload)"],
});

#[test_case("/test/json/:path", "/test/json/{path}" ; "single parameter")]
#[test_case("/users/:id/posts/:post_id", "/users/{id}/posts/{post_id}" ; "two parameters")]
#[test_case("/static/path", "/static/path" ; "no parameters")]
#[test_case("/", "/" ; "root")]
#[test_case("/a:b", "/a:b" ; "colon inside segment")]
fn test_openapi_path(input: &str, expected: &str) {
    assert_eq!(openapi_path(input), expected);
}

#[test]
fn test_http_method_parse() {
    assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
    assert_eq!("PATCH".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
    assert_eq!(HttpMethod::Trace.to_string(), "TRACE");
    assert!("CONNECT".parse::<HttpMethod>().is_err());
}

#[test]
fn test_new_document() {
    let doc = ApiDocument::new("desc", "1.2", "Title");
    let json = doc.to_json();

    assert_eq!(json["openapi"], "3.0.0");
    assert_eq!(json["info"], json!({"title": "Title", "description": "desc", "version": "1.2"}));
    assert_eq!(json["paths"], json!({}));
    assert_eq!(doc.operation_count(), 0);
}

#[test]
fn test_document_from_config_info() {
    let config = crate::config::load_config_from_str("document:\n  title: Users\n").unwrap();
    let doc = ApiDocument::from_info(config.document.as_ref().unwrap());

    assert_eq!(
        doc.to_json()["info"],
        json!({"title": "Users", "description": "", "version": "1.0"})
    );
}

#[test]
fn test_operations_share_path_item() {
    let mut doc = ApiDocument::new("", "1.0", "T");
    doc.operation(HttpMethod::Get, "/users/:id").summary("get");
    doc.operation(HttpMethod::Delete, "/users/:id").summary("delete");

    assert_eq!(doc.paths.len(), 1);
    assert_eq!(doc.operation_count(), 2);

    let item = &doc.paths["/users/{id}"];
    assert_eq!(item.len(), 2);
    assert_eq!(
        item.operation(HttpMethod::Get).unwrap().summary.as_deref(),
        Some("get")
    );
    assert!(item.operation(HttpMethod::Post).is_none());
}

#[test]
fn test_operation_replaced_on_redeclare() {
    let mut doc = ApiDocument::new("", "1.0", "T");
    doc.operation(HttpMethod::Post, "/items").tag("first");
    doc.operation(HttpMethod::Post, "/items").summary("second");

    let op = doc.get_operation(HttpMethod::Post, "/items").unwrap();
    assert!(op.tags.is_empty());
    assert_eq!(op.summary.as_deref(), Some("second"));
}

#[test]
fn test_parameters() {
    let builder = SchemaBuilder::default();
    let header = Parameter::header("Test-Header")
        .schema(&builder, &"val1")
        .unwrap()
        .enum_values(["val1", "val2"])
        .unwrap()
        .description("Testing header");
    let query = Parameter::query("t")
        .schema(&builder, &"test")
        .unwrap()
        .required(false);

    assert_eq!(
        serde_json::to_value(&header).unwrap(),
        json!({
            "name": "Test-Header",
            "in": "header",
            "description": "Testing header",
            "required": true,
            "schema": {"type": "string", "example": "val1", "enum": ["val1", "val2"]}
        })
    );
    assert!(!query.required);
    assert_eq!(query.location, ParameterLocation::Query);
    assert!(Parameter::path("id").required);
}

#[test]
fn test_enum_without_schema_fails() {
    let err = Parameter::header("X").enum_values(["a"]).unwrap_err();
    match err {
        Error::MissingParameterSchema { name } => assert_eq!(name, "X"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_json_bodies_carry_example() {
    let builder = SchemaBuilder::default();
    let prototype = JsonResponse {
        field_one: "abc".to_string(),
        field_two: false,
    };

    let body = RequestBody::json(&builder, &prototype)
        .unwrap()
        .description("test JSON request body");
    assert!(body.required);

    let media = &body.content["application/json"];
    assert_eq!(media.schema.schema_type, SchemaType::Object);
    assert_eq!(
        media.schema.example,
        Some(json!({"field1": "abc", "field2": false}))
    );

    let response = Response::json(&builder, &prototype).unwrap();
    assert_eq!(
        response.content["application/json"].schema.example,
        Some(json!({"field1": "abc", "field2": false}))
    );
}

#[test]
fn test_json_body_example_only_for_objects() {
    let builder = SchemaBuilder::default();

    let body = RequestBody::json(&builder, &vec!["a".to_string()]).unwrap();
    let schema = &body.content["application/json"].schema;
    assert_eq!(schema.schema_type, SchemaType::Array);
    assert_eq!(schema.example, None);
    assert_eq!(
        schema.items.as_ref().unwrap().example,
        Some(json!("a"))
    );

    let mut map = std::collections::BTreeMap::new();
    map.insert("k".to_string(), 1_i64);
    let response = Response::json(&builder, &map).unwrap();
    assert_eq!(
        response.content["application/json"].schema.example,
        Some(json!({"k": 1}))
    );
}

#[test]
fn test_form_bodies() {
    let builder = SchemaBuilder::default();
    let form = UploadForm::default();

    let body = RequestBody::multipart_form(&builder, &form).unwrap();
    let schema = &body.content["multipart/form-data"].schema;
    assert_eq!(schema.required, vec!["title", "fileField"]);
    assert_eq!(
        schema.get_property("fileField").unwrap().format.as_deref(),
        Some("binary")
    );
    assert_eq!(schema.example, None);

    let body = RequestBody::urlencoded_form(&builder, &form)
        .unwrap()
        .required(false);
    assert!(!body.required);
    assert!(body.content.contains_key("application/x-www-form-urlencoded"));
}

#[test]
fn test_text_responses() {
    let text = Response::text("success");
    assert_eq!(
        serde_json::to_value(&text.content["text/plain"]).unwrap(),
        json!({"schema": {"type": "string", "example": "success"}})
    );
    assert!(Response::csv("a,b").content.contains_key("text/csv"));
    assert_eq!(
        Response::pdf().content["application/pdf"].schema.example,
        Some(json!(""))
    );
}

#[test]
fn test_full_document() {
    let builder = SchemaBuilder::default();
    let mut doc = ApiDocument::new("example api", "1.0", "Example");

    doc.operation(HttpMethod::Put, "/test/json/:path")
        .summary("json test")
        .description("json test description")
        .tag("example")
        .parameter(
            Parameter::path("path")
                .schema(&builder, &"path-test")
                .unwrap()
                .description("Testing path"),
        )
        .request_body(RequestBody::json(&builder, &JsonResponse::default()).unwrap())
        .response(
            "200",
            Response::json(&builder, &JsonResponse::default()).unwrap(),
            "success",
        );

    doc.operation(HttpMethod::Post, "/test")
        .tag("example")
        .request_body(RequestBody::multipart_form(&builder, &UploadForm::default()).unwrap())
        .response("200", Response::text("success"), "success");

    let json = doc.to_json();
    let put = &json["paths"]["/test/json/{path}"]["put"];
    assert_eq!(put["tags"], json!(["example"]));
    assert_eq!(put["parameters"][0]["in"], "path");
    assert_eq!(put["requestBody"]["required"], true);
    assert_eq!(
        put["responses"]["200"]["description"],
        "success"
    );
    assert_eq!(
        put["responses"]["200"]["content"]["application/json"]["schema"]["properties"]["field1"]
            ["description"],
        "example field one"
    );

    let post = &json["paths"]["/test"]["post"];
    assert!(post.get("parameters").is_none());
    assert_eq!(post["responses"]["200"]["content"]["text/plain"]["schema"]["type"], "string");

    let yaml = doc.to_yaml().unwrap();
    assert!(yaml.contains("openapi:"));
    assert!(yaml.contains("3.0.0"));
    assert!(yaml.contains("/test/json/{path}"));

    let pretty = doc.to_json_pretty().unwrap();
    let parsed: ApiDocument = serde_json::from_str(&pretty).unwrap();
    assert_eq!(parsed, doc);
}
