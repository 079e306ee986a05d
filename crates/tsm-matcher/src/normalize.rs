//! Type-string normalization.
//!
//! Declared-type extraction hands us type-syntax nodes; the matcher works on
//! canonical strings. This module converts between the two:
//!
//! | syntax                         | canonical text           |
//! |--------------------------------|--------------------------|
//! | `string`, `number`, ...        | same keyword             |
//! | `T[]`                          | `<T>[]`                  |
//! | `Foo`, `Foo<Bar>`              | verbatim reference text  |
//! | `{ a?: T; b: U }`              | `{ a?: <T>; b: <U> }`    |
//! | `A \| B`                       | `<A> \| <B>`             |
//! | anything else                  | raw source text or `any` |
//!
//! Generic arguments on references are kept verbatim here and only stripped
//! when the catalog is queried (see [`crate::catalog::strip_type_arguments`]).

use crate::types::{ANY_TYPE, PropertySignature};
use serde::{Deserialize, Serialize};

/// Primitive keyword types that map 1:1 onto canonical tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordKind {
    String,
    Number,
    Boolean,
    Any,
    Void,
    Null,
    Undefined,
    Object,
}

impl KeywordKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Void => "void",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Object => "object",
        }
    }
}

/// Type syntax as produced by the external declaration extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeNode {
    Keyword { keyword: KeywordKind },
    Array { element: Box<TypeNode> },
    /// A reference to a named type, written as in source (`Page<User>`).
    Reference { text: String },
    /// An inline object type literal.
    Literal { members: Vec<MemberNode> },
    Union { members: Vec<TypeNode> },
    /// Syntax the normalizer does not model (function types, tuples, ...).
    Other { text: Option<String> },
}

/// A property member of an interface, type alias, or inline object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberNode {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    /// `None` when the member has no type annotation.
    #[serde(default, rename = "type")]
    pub type_node: Option<TypeNode>,
}

impl TypeNode {
    pub fn keyword(keyword: KeywordKind) -> Self {
        Self::Keyword { keyword }
    }

    pub fn array(element: TypeNode) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    pub fn reference(text: impl Into<String>) -> Self {
        Self::Reference { text: text.into() }
    }
}

impl MemberNode {
    pub fn new(name: impl Into<String>, type_node: TypeNode) -> Self {
        Self {
            name: name.into(),
            optional: false,
            type_node: Some(type_node),
        }
    }

    pub fn optional(name: impl Into<String>, type_node: TypeNode) -> Self {
        Self {
            optional: true,
            ..Self::new(name, type_node)
        }
    }
}

/// Convert an optional type node into its canonical string.
///
/// A missing node normalizes to `any`.
pub fn normalize_type(node: Option<&TypeNode>) -> String {
    let Some(node) = node else {
        return ANY_TYPE.to_string();
    };

    match node {
        TypeNode::Keyword { keyword } => keyword.as_str().to_string(),
        TypeNode::Array { element } => format!("{}[]", normalize_type(Some(element.as_ref()))),
        TypeNode::Reference { text } => text.trim().to_string(),
        TypeNode::Literal { members } => serialize_inline(&declared_properties(members)),
        TypeNode::Union { members } => members
            .iter()
            .map(|member| normalize_type(Some(member)))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeNode::Other { text } => match text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => ANY_TYPE.to_string(),
        },
    }
}

/// Convert a declaration's members into property signatures.
///
/// Declared properties never carry `nested_properties`; inline object types
/// stay in their serialized form and are parsed on demand.
pub fn declared_properties(members: &[MemberNode]) -> Vec<PropertySignature> {
    members
        .iter()
        .map(|member| PropertySignature {
            name: member.name.clone(),
            type_text: normalize_type(member.type_node.as_ref()),
            optional: member.optional,
            nested_properties: None,
        })
        .collect()
}

/// Serialize properties in inline-object form: `{ a: string; b?: number }`.
pub fn serialize_inline(properties: &[PropertySignature]) -> String {
    if properties.is_empty() {
        return "{}".to_string();
    }

    let fields: Vec<String> = properties
        .iter()
        .map(|prop| {
            let marker = if prop.optional { "?" } else { "" };
            format!("{}{}: {}", prop.name, marker, prop.type_text)
        })
        .collect();
    format!("{{ {} }}", fields.join("; "))
}

#[cfg(test)]
#[path = "../tests/normalize_tests.rs"]
mod normalize_tests;
