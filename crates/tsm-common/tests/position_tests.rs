use super::*;

#[test]
fn test_location_serializes_camel_case() {
    let location = Location::new(
        "src/models/user.ts",
        Range::new(Position::new(3, 0), Position::new(7, 1)),
    );
    let json = serde_json::to_value(&location).unwrap();

    assert_eq!(json["filePath"], "src/models/user.ts");
    assert_eq!(json["range"]["start"]["line"], 3);
    assert_eq!(json["range"]["end"]["character"], 1);
}

#[test]
fn test_location_range_defaults_when_absent() {
    let location: Location = serde_json::from_str(r#"{ "filePath": "a.ts" }"#).unwrap();

    assert_eq!(location.file_path, "a.ts");
    assert_eq!(location.range, Range::default());
}

#[test]
fn test_positions_order_by_line_then_character() {
    assert!(Position::new(2, 4) < Position::new(2, 5));
    assert!(Position::new(1, 9) < Position::new(2, 0));
}
