//! The type compatibility rule.
//!
//! Compares an inferred property's canonical type text against a declared
//! property's canonical type text. This is a textual rule, not a type
//! checker: union members are compared as written, so an inferred `string`
//! does not satisfy `'light' | 'dark'`.

use crate::inline_type::split_top_level;
use crate::types::{ANY_TYPE, DATE_TYPE};

const ARRAY_SUFFIX: &str = "[]";

/// Returns `true` if a value of type `inferred` fits a slot typed `declared`.
///
/// Rules, first match wins:
/// 1. identical text
/// 2. either side is `any`
/// 3. one side mentions `Date` and the other is exactly `Date`
/// 4. both are arrays: element types must be compatible
/// 5. `declared` is a union: `inferred` must be compatible with some member
pub fn is_compatible(inferred: &str, declared: &str) -> bool {
    let inferred = inferred.trim();
    let declared = declared.trim();

    if inferred == declared {
        return true;
    }
    if inferred == ANY_TYPE || declared == ANY_TYPE {
        return true;
    }
    if is_date_pair(inferred, declared) {
        return true;
    }
    if let (Some(inferred_elem), Some(declared_elem)) =
        (array_element(inferred), array_element(declared))
    {
        return is_compatible(inferred_elem, declared_elem);
    }
    if is_union(declared) {
        return union_members(declared)
            .into_iter()
            .any(|member| is_compatible(inferred, member));
    }

    false
}

/// Returns `true` if `text` is a union type (`A | B`).
#[inline]
pub fn is_union(text: &str) -> bool {
    text.contains('|')
}

/// Trimmed members of a union type. Separators inside inline object types
/// are not split.
pub fn union_members(text: &str) -> Vec<&str> {
    split_top_level(text, '|')
        .into_iter()
        .map(str::trim)
        .collect()
}

/// Element type of an array type (`string[]` → `string`).
pub fn array_element(text: &str) -> Option<&str> {
    text.strip_suffix(ARRAY_SUFFIX).map(str::trim)
}

fn is_date_pair(a: &str, b: &str) -> bool {
    (a.contains(DATE_TYPE) && b == DATE_TYPE) || (b.contains(DATE_TYPE) && a == DATE_TYPE)
}

#[cfg(test)]
#[path = "../tests/compat_tests.rs"]
mod compat_tests;
