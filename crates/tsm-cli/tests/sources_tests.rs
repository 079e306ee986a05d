use super::*;
use std::fs;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

const USER_DECLARATIONS: &str = r#"{
  "declarations": [
    {
      "name": "User",
      "location": { "start": { "line": 2, "character": 0 }, "end": { "line": 6, "character": 1 } },
      "members": [
        { "name": "id", "type": { "kind": "keyword", "keyword": "number" } },
        { "name": "tags", "type": { "kind": "array", "element": { "kind": "keyword", "keyword": "string" } } },
        { "name": "profile", "optional": true, "type": { "kind": "reference", "text": "UserProfile" } },
        { "name": "untyped" }
      ]
    }
  ]
}"#;

#[test]
fn test_discover_maps_declaration_files_to_source_paths() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/models/user.ts.json", USER_DECLARATIONS);
    write(dir.path(), "src/app.ts.json", r#"{ "declarations": [] }"#);
    write(dir.path(), "README.md", "not a declaration file");

    let source = JsonDeclarationSource::new(dir.path());
    let paths = source.discover().unwrap();

    assert_eq!(paths, ["src/app.ts", "src/models/user.ts"]);
}

#[test]
fn test_declared_types_are_normalized() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/models/user.ts.json", USER_DECLARATIONS);
    let source = JsonDeclarationSource::new(dir.path());

    let types = source.declared_types("src/models/user.ts").unwrap();

    assert_eq!(types.len(), 1);
    let user = &types[0];
    assert_eq!(user.name, "User");
    assert_eq!(user.file_path, "src/models/user.ts");
    assert_eq!(user.location.start.line, 2);
    let rendered: Vec<(&str, &str, bool)> = user
        .properties
        .iter()
        .map(|p| (p.name.as_str(), p.type_text.as_str(), p.optional))
        .collect();
    assert_eq!(
        rendered,
        [
            ("id", "number", false),
            ("tags", "string[]", false),
            ("profile", "UserProfile", true),
            ("untyped", "any", false),
        ]
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let source = JsonDeclarationSource::new(dir.path());

    let err = source.declared_types("src/gone.ts").unwrap_err();
    assert!(err.to_string().contains("failed to read declarations"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.ts.json", "{ not json");
    let source = JsonDeclarationSource::new(dir.path());

    let err = source.declared_types("bad.ts").unwrap_err();
    assert!(err.to_string().contains("failed to parse declarations"));
}
