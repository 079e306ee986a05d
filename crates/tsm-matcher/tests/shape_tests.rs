use super::*;
use tsm_common::{Position, Range};

fn entry(name: &str, value: LiteralValue) -> (String, LiteralValue) {
    (name.to_string(), value)
}

#[test]
fn test_primitive_literals() {
    assert_eq!(LiteralValue::String.type_text(), "string");
    assert_eq!(LiteralValue::Number.type_text(), "number");
    assert_eq!(LiteralValue::Boolean.type_text(), "boolean");
    assert_eq!(LiteralValue::Null.type_text(), "null");
    assert_eq!(LiteralValue::Undefined.type_text(), "undefined");
    assert_eq!(LiteralValue::Date.type_text(), "Date");
}

#[test]
fn test_arrays_infer_as_any_array() {
    let numbers = LiteralValue::Array(vec![LiteralValue::Number]);
    let mixed = LiteralValue::Array(vec![LiteralValue::Number, LiteralValue::String]);
    let objects = LiteralValue::Array(vec![LiteralValue::Object(vec![entry(
        "id",
        LiteralValue::Number,
    )])]);

    assert_eq!(numbers.type_text(), "any[]");
    assert_eq!(mixed.type_text(), "any[]");
    assert_eq!(objects.type_text(), "any[]");
    assert_eq!(LiteralValue::Array(vec![]).type_text(), "any[]");
}

#[test]
fn test_expressions() {
    assert_eq!(
        LiteralValue::Expression("computeTotal()".to_string()).type_text(),
        "any"
    );
    assert_eq!(
        LiteralValue::Expression(" new Date(ts) ".to_string()).type_text(),
        "new Date(ts)"
    );
}

#[test]
fn test_nested_objects_keep_structure() {
    let entries = vec![
        entry("id", LiteralValue::Number),
        entry(
            "profile",
            LiteralValue::Object(vec![
                entry("bio", LiteralValue::String),
                entry(
                    "links",
                    LiteralValue::Object(vec![entry("site", LiteralValue::String)]),
                ),
            ]),
        ),
        entry("tags", LiteralValue::Array(vec![LiteralValue::String])),
    ];

    let props = infer_properties(&entries);

    assert_eq!(props.len(), 3);
    assert!(props[0].nested_properties.is_none());
    assert_eq!(props[1].type_text, "object");
    let profile = props[1].nested_properties.as_ref().unwrap();
    assert_eq!(profile[0].name, "bio");
    assert_eq!(profile[1].nested_properties.as_ref().unwrap()[0].name, "site");
    assert!(props[2].nested_properties.is_none());
}

#[test]
fn test_empty_object_literal_has_empty_nested_list() {
    let props = infer_properties(&[entry("meta", LiteralValue::Object(vec![]))]);
    assert_eq!(props[0].nested_properties, Some(vec![]));
}

#[test]
fn test_infer_shape_carries_location() {
    let location = Location::new(
        "src/app.ts",
        Range::new(Position::new(10, 14), Position::new(12, 1)),
    );
    let shape = infer_shape(&[entry("id", LiteralValue::Number)], location.clone());

    assert_eq!(shape.source_location(), &location);
    assert_eq!(shape.file_path(), "src/app.ts");
    assert!(!shape.properties()[0].optional);
}

#[test]
fn test_literal_json_form() {
    let value: LiteralValue = serde_json::from_str(
        r#"{ "kind": "object", "value": [["a", { "kind": "string" }], ["b", { "kind": "array", "value": [] }]] }"#,
    )
    .unwrap();

    assert_eq!(
        value,
        LiteralValue::Object(vec![
            entry("a", LiteralValue::String),
            entry("b", LiteralValue::Array(vec![])),
        ])
    );
}
