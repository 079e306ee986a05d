use super::*;

fn names(props: &[PropertySignature]) -> Vec<&str> {
    props.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_simple_fields() {
    let props = parse_inline_type("{ a: string; b?: number }");

    assert_eq!(names(&props), ["a", "b"]);
    assert_eq!(props[0].type_text, "string");
    assert!(!props[0].optional);
    assert_eq!(props[1].type_text, "number");
    assert!(props[1].optional);
}

#[test]
fn test_nested_braces_do_not_split_early() {
    let props = parse_inline_type("{ a: { b: string; c: number }; d: boolean }");

    assert_eq!(names(&props), ["a", "d"]);
    assert_eq!(props[0].type_text, "{ b: string; c: number }");
    assert_eq!(props[1].type_text, "boolean");
}

#[test]
fn test_deeply_nested_braces() {
    let props = parse_inline_type("{ a: { b: { c: { d: string } } }; e: number[] }");

    assert_eq!(names(&props), ["a", "e"]);
    assert_eq!(props[0].type_text, "{ b: { c: { d: string } } }");
}

#[test]
fn test_empty_content_yields_empty_list() {
    assert!(parse_inline_type("{}").is_empty());
    assert!(parse_inline_type("{   }").is_empty());
    assert!(parse_inline_type("").is_empty());
    assert!(parse_inline_type("string").is_empty());
}

#[test]
fn test_malformed_fields_are_dropped() {
    let props = parse_inline_type("{ a: string; ???; : number; 'quoted': boolean; b: }");
    assert_eq!(names(&props), ["a"]);
}

#[test]
fn test_trailing_separator_and_whitespace() {
    let props = parse_inline_type("{\n  a : string;\n  b ?: number;\n}");

    assert_eq!(names(&props), ["a", "b"]);
    assert_eq!(props[0].type_text, "string");
    assert!(props[1].optional);
}

#[test]
fn test_unbalanced_braces_parse_what_is_there() {
    let props = parse_inline_type("{ a: string; b: number");
    assert_eq!(names(&props), ["a", "b"]);
}

#[test]
fn test_text_outside_outer_braces_is_ignored() {
    let props = parse_inline_type("{ a: string } | null");
    assert_eq!(names(&props), ["a"]);
}

#[test]
fn test_union_and_generic_field_types_are_kept_verbatim() {
    let props = parse_inline_type("{ status: 'on' | 'off'; items: Array<Item>; when: Date }");

    assert_eq!(props[0].type_text, "'on' | 'off'");
    assert_eq!(props[1].type_text, "Array<Item>");
    assert_eq!(props[2].type_text, "Date");
}

#[test]
fn test_parsed_properties_have_no_nested_shape() {
    let props = parse_inline_type("{ a: { b: string } }");
    assert!(props[0].nested_properties.is_none());
}

#[test]
fn test_split_top_level_respects_depth() {
    assert_eq!(
        split_top_level("{ a: 1 | 2 } | null | B", '|'),
        ["{ a: 1 | 2 } ", " null ", " B"]
    );
}
