use super::*;
use crate::args::OutputFormat;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn keyword(name: &str, keyword: &str) -> String {
    format!(r#"{{ "name": "{name}", "type": {{ "kind": "keyword", "keyword": "{keyword}" }} }}"#)
}

fn declaration(name: &str, members: &[String]) -> String {
    format!(r#"{{ "name": "{name}", "members": [{}] }}"#, members.join(", "))
}

fn declaration_file(declarations: &[String]) -> String {
    format!(r#"{{ "declarations": [{}] }}"#, declarations.join(", "))
}

/// Two `Contact` declarations with identical members in different directories,
/// plus a `BasicUser` only partially matched by the literal.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let contact = declaration("Contact", &[keyword("name", "string"), keyword("email", "string")]);
    write(
        dir.path(),
        "decls/lib/contact.ts.json",
        &declaration_file(std::slice::from_ref(&contact)),
    );
    write(
        dir.path(),
        "decls/src/forms/contact.ts.json",
        &declaration_file(&[contact]),
    );
    write(
        dir.path(),
        "decls/src/models/user.ts.json",
        &declaration_file(&[declaration(
            "BasicUser",
            &[
                keyword("id", "number"),
                keyword("name", "string"),
                keyword("email", "string"),
            ],
        )]),
    );
    write(dir.path(), "decls/src/broken.ts.json", "{ oops");
    write(
        dir.path(),
        "shapes.json",
        r#"[
          {
            "location": { "filePath": "src/forms/signup.ts", "range": { "start": { "line": 9, "character": 4 }, "end": { "line": 9, "character": 40 } } },
            "entries": [["name", { "kind": "string" }], ["email", { "kind": "string" }]]
          },
          {
            "location": { "filePath": "src/empty.ts" },
            "entries": [["unrelated", { "kind": "boolean" }]]
          }
        ]"#,
    );
    dir
}

fn cli(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["tsm", "-c", "decls", "-s", "shapes.json"];
    argv.extend_from_slice(extra);
    CliArgs::parse_from(argv)
}

#[test]
fn test_run_ranks_suggestions_per_shape() {
    let dir = project();

    let reports = run(&cli(&[]), dir.path()).unwrap();

    assert_eq!(reports.len(), 2);
    let signup = &reports[0];
    assert_eq!(signup.location.file_path, "src/forms/signup.ts");
    let found: Vec<(&str, &str)> = signup
        .suggestions
        .iter()
        .map(|m| (m.type_name.as_str(), m.file_path.as_str()))
        .collect();
    // equal scores: the declaration nearest the literal comes first
    assert_eq!(
        found,
        [
            ("Contact", "src/forms/contact.ts"),
            ("Contact", "lib/contact.ts"),
            ("BasicUser", "src/models/user.ts"),
        ]
    );
    assert_eq!(signup.suggestions[0].percentage(), 100);
    assert_eq!(signup.suggestions[2].missing_properties, ["id"]);

    assert!(reports[1].suggestions.is_empty());
}

#[test]
fn test_run_honors_max_results() {
    let dir = project();

    let reports = run(&cli(&["-n", "1", "--sequential"]), dir.path()).unwrap();

    assert_eq!(reports[0].suggestions.len(), 1);
    assert_eq!(reports[0].suggestions[0].file_path, "src/forms/contact.ts");
}

#[test]
fn test_run_fails_on_missing_shapes_file() {
    let dir = project();
    fs::remove_file(dir.path().join("shapes.json")).unwrap();

    let err = run(&cli(&[]), dir.path()).unwrap_err();

    assert!(format!("{err:#}").contains("failed to read shapes"));
}

#[test]
fn test_output_format_flag() {
    assert_eq!(cli(&[]).format, OutputFormat::Text);
    assert_eq!(cli(&["--format", "json"]).format, OutputFormat::Json);
}
