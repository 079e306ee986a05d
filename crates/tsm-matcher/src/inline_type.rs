//! Parser for canonical inline-object type strings.
//!
//! Turns `{ a: { b: string; c: number }; d?: boolean }` back into a property
//! list. Nested braces are tracked explicitly: the outermost span is found by
//! brace depth, and fields are split on `;` at depth 0 only, so nested inline
//! objects survive intact as the field's type text.
//!
//! Parsing never fails. Fields that do not look like `name?: type` are
//! dropped and whatever parsed successfully is returned.

use crate::types::PropertySignature;
use once_cell::sync::Lazy;
use regex::Regex;

/// `name`, optional `?`, `:`, type. The type may span lines.
static FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*(\?)?\s*:\s*(\S.*?)\s*$")
        .expect("field pattern is a valid regex")
});

/// Parse an inline-object type string into its top-level properties.
pub fn parse_inline_type(text: &str) -> Vec<PropertySignature> {
    let Some(body) = outer_object_body(text) else {
        return Vec::new();
    };

    split_top_level(body, ';')
        .into_iter()
        .filter_map(parse_field)
        .collect()
}

/// Content between the first `{` and its matching `}`.
///
/// An unbalanced span (no matching close brace) yields everything after the
/// opening brace.
fn outer_object_body(text: &str) -> Option<&str> {
    let open = text.find('{')?;
    let body_start = open + 1;
    let mut depth = 0u32;

    for (offset, ch) in text[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[body_start..open + offset]);
                }
            }
            _ => {}
        }
    }

    Some(&text[body_start..])
}

/// Split `text` on `separator`, ignoring separators nested inside braces.
///
/// Empty and whitespace-only pieces are discarded.
pub(crate) fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0u32;
    let mut start = 0;

    for (offset, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ if ch == separator && depth == 0 => {
                pieces.push(&text[start..offset]);
                start = offset + ch.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

fn parse_field(field: &str) -> Option<PropertySignature> {
    let captures = FIELD_PATTERN.captures(field)?;
    let name = captures.get(1)?.as_str();
    let optional = captures.get(2).is_some();
    let type_text = captures.get(3)?.as_str();

    Some(PropertySignature {
        name: name.to_string(),
        type_text: type_text.to_string(),
        optional,
        nested_properties: None,
    })
}

#[cfg(test)]
#[path = "../tests/inline_type_tests.rs"]
mod inline_type_tests;
