//! Rendering suggestions for the terminal or for tooling.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use tsm_common::{Location, Position};
use tsm_matcher::{CompatibilityMatch, NestedMatch};

/// Suggestions for one object literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeReport {
    pub location: Location,
    pub suggestions: Vec<CompatibilityMatch>,
}

/// Human-readable listing, one block per object literal.
///
/// ```text
/// src/app.ts:5:15
///    67%  User  src/models/user.ts:4:1  missing: email
///         profile 33% (nested)
/// ```
pub fn render_text(reports: &[ShapeReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "{}",
            display_location(&report.location.file_path, report.location.range.start)
        );
        if report.suggestions.is_empty() {
            out.push_str("  no matching types\n");
            continue;
        }
        for suggestion in &report.suggestions {
            render_suggestion(&mut out, suggestion);
        }
    }
    out
}

fn render_suggestion(out: &mut String, suggestion: &CompatibilityMatch) {
    let _ = write!(
        out,
        "  {:>3}%  {}  {}",
        suggestion.percentage(),
        suggestion.type_name,
        display_location(&suggestion.file_path, suggestion.location.start)
    );
    if suggestion.is_exact_match {
        out.push_str("  (exact)");
    }
    if !suggestion.missing_properties.is_empty() {
        let _ = write!(out, "  missing: {}", suggestion.missing_properties.join(", "));
    }
    if !suggestion.extra_properties.is_empty() {
        let _ = write!(out, "  extra: {}", suggestion.extra_properties.join(", "));
    }
    out.push('\n');

    for nested in suggestion.nested_matches.iter().filter(|m| m.is_nested) {
        render_nested(out, nested);
    }
}

fn render_nested(out: &mut String, nested: &NestedMatch) {
    let _ = writeln!(
        out,
        "        {} {}% (nested)",
        nested.property_name,
        nested.percentage()
    );
}

/// `path:line:column`, 1-based.
fn display_location(file_path: &str, position: Position) -> String {
    format!(
        "{}:{}:{}",
        file_path,
        position.line + 1,
        position.character + 1
    )
}

/// Pretty-printed JSON array of reports.
pub fn render_json(reports: &[ShapeReport]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(reports)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "../tests/report_tests.rs"]
mod report_tests;
