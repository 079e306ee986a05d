//! Building inferred shapes from object literal values.
//!
//! The source parser hands over a tree of `{name, literal}` pairs; this module
//! assigns each literal its canonical type text and keeps the structure of
//! nested object literals in `nested_properties`.

use crate::types::{ANY_TYPE, DATE_TYPE, InferredShape, OBJECT_TYPE, PropertySignature};
use serde::{Deserialize, Serialize};
use tsm_common::Location;

/// Kind of a literal value found in an object literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum LiteralValue {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    /// `new Date(...)`.
    Date,
    Array(Vec<LiteralValue>),
    Object(Vec<(String, LiteralValue)>),
    /// Any other expression, by its source text (identifiers, calls, ...).
    Expression(String),
}

impl LiteralValue {
    /// Canonical type text of this value.
    ///
    /// Every array literal infers as `any[]`, whatever its elements, so it
    /// fits any declared array type. Expressions are opaque and infer as
    /// `any`, except text mentioning `Date`, which is kept verbatim so it can
    /// match a declared `Date`.
    pub fn type_text(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Null => "null".to_string(),
            Self::Undefined => "undefined".to_string(),
            Self::Date => DATE_TYPE.to_string(),
            Self::Array(_) => format!("{ANY_TYPE}[]"),
            Self::Object(_) => OBJECT_TYPE.to_string(),
            Self::Expression(text) if text.contains(DATE_TYPE) => text.trim().to_string(),
            Self::Expression(_) => ANY_TYPE.to_string(),
        }
    }
}

/// Convert object literal entries into property signatures.
pub fn infer_properties(entries: &[(String, LiteralValue)]) -> Vec<PropertySignature> {
    entries
        .iter()
        .map(|(name, value)| match value {
            LiteralValue::Object(nested) => {
                PropertySignature::object(name.clone(), infer_properties(nested))
            }
            _ => PropertySignature::new(name.clone(), value.type_text()),
        })
        .collect()
}

/// Build the inferred shape of an object literal.
pub fn infer_shape(entries: &[(String, LiteralValue)], source_location: Location) -> InferredShape {
    InferredShape::new(infer_properties(entries), source_location)
}

#[cfg(test)]
#[path = "../tests/shape_tests.rs"]
mod shape_tests;
