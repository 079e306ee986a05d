//! Data model shared by the matcher components.
//!
//! Types are carried as canonical type strings (see [`crate::normalize`]):
//! primitive tags, `T[]`, inline `{ a: T; b?: U }` objects, bare references
//! and `A | B` unions. Everything here is plain data; the scoring logic lives
//! in [`crate::scorer`].

use serde::{Deserialize, Serialize};
use tsm_common::{Location, Range};

/// Canonical text for the permissive fallback type.
///
/// Unrecognized type syntax and unrecognized literal expressions degrade to
/// `any`, which the compatibility rule accepts against everything. Suggestions
/// favor false positives over false negatives.
pub const ANY_TYPE: &str = "any";

/// Canonical text inferred for an object literal value.
pub const OBJECT_TYPE: &str = "object";

/// Canonical text for date values.
pub const DATE_TYPE: &str = "Date";

/// A single property of an inferred shape or a declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySignature {
    pub name: String,
    /// Canonical type string.
    #[serde(rename = "type")]
    pub type_text: String,
    #[serde(default)]
    pub optional: bool,
    /// Present only when the property's literal value was itself an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_properties: Option<Vec<PropertySignature>>,
}

impl PropertySignature {
    /// A required property without nested structure.
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            optional: false,
            nested_properties: None,
        }
    }

    /// An optional (`name?: type`) property.
    pub fn optional(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::new(name, type_text)
        }
    }

    /// An object-literal property with its nested shape.
    pub fn object(name: impl Into<String>, nested_properties: Vec<PropertySignature>) -> Self {
        Self {
            nested_properties: Some(nested_properties),
            ..Self::new(name, OBJECT_TYPE)
        }
    }

    /// Returns `true` if the inferred value was an object literal.
    #[inline]
    pub fn is_object_literal(&self) -> bool {
        self.type_text == OBJECT_TYPE
    }
}

/// Structural description of an untyped object literal.
///
/// Built once per literal and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredShape {
    properties: Vec<PropertySignature>,
    #[serde(default)]
    source_location: Location,
}

impl InferredShape {
    /// Create a shape from its top-level properties.
    ///
    /// Inferred properties are never optional; any `optional` flag on a
    /// top-level property is cleared.
    pub fn new(properties: Vec<PropertySignature>, source_location: Location) -> Self {
        let properties = properties
            .into_iter()
            .map(|prop| PropertySignature {
                optional: false,
                ..prop
            })
            .collect();
        Self {
            properties,
            source_location,
        }
    }

    #[inline]
    pub fn properties(&self) -> &[PropertySignature] {
        &self.properties
    }

    #[inline]
    pub fn source_location(&self) -> &Location {
        &self.source_location
    }

    /// Path of the file containing the literal.
    #[inline]
    pub fn file_path(&self) -> &str {
        &self.source_location.file_path
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A named structural type (interface or type alias) found in project source.
///
/// Names are unique per file only; the same name may be declared in several
/// files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredType {
    pub name: String,
    pub properties: Vec<PropertySignature>,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub location: Range,
}

impl DeclaredType {
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        properties: Vec<PropertySignature>,
    ) -> Self {
        Self {
            name: name.into(),
            properties,
            file_path: file_path.into(),
            location: Range::default(),
        }
    }

    /// Builder: set the declaration's source range.
    pub fn with_location(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    /// Look up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&PropertySignature> {
        self.properties.iter().find(|prop| prop.name == name)
    }
}

/// Per-property entry of a [`CompatibilityMatch`] breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedMatch {
    pub property_name: String,
    pub score: f64,
    /// `true` when the score came from recursively matching an object literal.
    pub is_nested: bool,
}

/// Result of scoring one inferred shape against one declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityMatch {
    pub type_name: String,
    pub file_path: String,
    pub location: Range,
    /// Score in `[0, 1]`.
    pub compatibility_score: f64,
    /// Required declared properties absent from the shape.
    pub missing_properties: Vec<String>,
    /// Shape properties the declared type does not mention.
    pub extra_properties: Vec<String>,
    /// Name coverage only: no missing and no extra properties. Independent of
    /// the score, so a type mismatch on a present property still counts.
    pub is_exact_match: bool,
    pub nested_matches: Vec<NestedMatch>,
}

impl CompatibilityMatch {
    /// Score as a whole percentage, for display.
    pub fn percentage(&self) -> u32 {
        to_percentage(self.compatibility_score)
    }
}

impl NestedMatch {
    /// Score as a whole percentage, for display.
    pub fn percentage(&self) -> u32 {
        to_percentage(self.score)
    }
}

fn to_percentage(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}
