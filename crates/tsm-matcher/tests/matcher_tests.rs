use super::*;
use crate::types::PropertySignature;
use tsm_common::Location;

fn prop(name: &str, type_text: &str) -> PropertySignature {
    PropertySignature::new(name, type_text)
}

fn shape(properties: Vec<PropertySignature>) -> InferredShape {
    InferredShape::new(properties, Location::new("src/app.ts", Default::default()))
}

fn catalog() -> TypeCatalog {
    TypeCatalog::from_files([
        (
            "src/models/user.ts",
            vec![
                DeclaredType::new(
                    "BasicUser",
                    "src/models/user.ts",
                    vec![prop("id", "number"), prop("name", "string"), prop("email", "string")],
                ),
                DeclaredType::new(
                    "NamedThing",
                    "src/models/user.ts",
                    vec![prop("name", "string")],
                ),
            ],
        ),
        (
            "src/other/point.ts",
            vec![DeclaredType::new(
                "Point",
                "src/other/point.ts",
                vec![prop("x", "number"), prop("y", "number")],
            )],
        ),
        (
            "src/other/named.ts",
            vec![DeclaredType::new(
                "Label",
                "src/other/named.ts",
                vec![prop("name", "string")],
            )],
        ),
    ])
}

fn names(matches: &[CompatibilityMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.type_name.as_str()).collect()
}

#[test]
fn test_score_all_ranks_and_drops_zero_scores() {
    let catalog = catalog();
    let shape = shape(vec![prop("id", "number"), prop("name", "string")]);

    let matches = score_all(&shape, &catalog);

    // Point shares no property name
    assert_eq!(names(&matches), ["BasicUser", "NamedThing", "Label"]);
    assert!(
        matches
            .windows(2)
            .all(|pair| pair[0].compatibility_score >= pair[1].compatibility_score)
    );
}

#[test]
fn test_empty_shape_has_no_candidates() {
    let catalog = catalog();
    assert!(score_all(&shape(vec![]), &catalog).is_empty());
}

#[test]
fn test_empty_catalog_has_no_candidates() {
    let matcher = TypeMatcher::new(Arc::new(TypeCatalog::new()));
    assert!(matcher.score_all(&shape(vec![prop("id", "number")])).is_empty());
}

#[test]
fn test_tie_breaker_orders_equal_scores() {
    let matcher = TypeMatcher::new(Arc::new(catalog()));
    let shape = shape(vec![prop("name", "string")]);

    let default_order = matcher.score_all(&shape);
    let reversed = matcher.score_all_with(&shape, |a, b| b.file_path.cmp(&a.file_path));

    assert_eq!(names(&default_order)[..2], ["NamedThing", "Label"]);
    assert_eq!(names(&reversed)[..2], ["Label", "NamedThing"]);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let catalog = Arc::new(catalog());
    let shape = shape(vec![prop("id", "number"), prop("name", "string"), prop("x", "number")]);
    let sequential = TypeMatcher::with_options(
        Arc::clone(&catalog),
        MatcherOptions {
            parallel: false,
            ..MatcherOptions::default()
        },
    );
    let parallel = TypeMatcher::new(catalog);

    assert_eq!(sequential.score_all(&shape), parallel.score_all(&shape));
}

#[test]
fn test_options_limit_results() {
    let matcher = TypeMatcher::with_options(
        Arc::new(catalog()),
        MatcherOptions {
            max_results: Some(1),
            ..MatcherOptions::default()
        },
    );

    let matches = matcher.score_all(&shape(vec![prop("id", "number"), prop("name", "string")]));

    assert_eq!(names(&matches), ["BasicUser"]);
}

#[test]
fn test_refresh_swaps_catalog() {
    let mut matcher = TypeMatcher::new(Arc::new(TypeCatalog::new()));
    let shape = shape(vec![prop("x", "number"), prop("y", "number")]);
    assert!(matcher.score_all(&shape).is_empty());

    matcher.refresh(Arc::new(catalog()));

    let matches = matcher.score_all(&shape);
    assert_eq!(names(&matches), ["Point"]);
    assert!(matches[0].is_exact_match);
    assert_eq!(matcher.catalog().len(), 4);
}

#[test]
fn test_single_score_matches_ranked_entry() {
    let matcher = TypeMatcher::new(Arc::new(catalog()));
    let shape = shape(vec![prop("id", "number"), prop("name", "string")]);
    let basic_user = matcher.catalog().lookup_by_name("BasicUser").unwrap().clone();

    let single = matcher.score(&shape, &basic_user);

    assert_eq!(matcher.score_all(&shape)[0], single);
    assert_eq!(single.missing_properties, ["email"]);
}
