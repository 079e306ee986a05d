//! Compatibility scoring of an inferred shape against a declared type.
//!
//! # Property scores
//!
//! A property present on both sides scores:
//! - `1.0` when the type texts satisfy [`is_compatible`],
//! - the nested score when the literal value is an object and the declared
//!   slot is not plain `object`,
//! - `0.3` otherwise (right name, wrong type).
//!
//! # Nested matching
//!
//! An object literal placed in a slot typed by a catalog reference or an
//! inline object type is scored recursively against that type's
//! properties. An object literal whose shape is unknown gets `0.1`; an
//! object in a slot the matcher cannot see into gets `0.5`.
//!
//! # Weighted score
//!
//! Every declared property weighs 1 and contributes its property score, `0.5`
//! if it is optional and absent, or `0` if it is required and absent. Every
//! inferred property the declared type does not mention weighs 1 and
//! contributes nothing. The score is `sum / weight`.

use crate::catalog::{TypeCatalog, bare_reference};
use crate::compat::is_compatible;
use crate::inline_type::parse_inline_type;
use crate::options::MatcherOptions;
use crate::types::{
    CompatibilityMatch, DeclaredType, InferredShape, NestedMatch, OBJECT_TYPE, PropertySignature,
};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// Same name, compatible type.
pub const COMPATIBLE_SCORE: f64 = 1.0;
/// Same name, incompatible type.
pub const TYPE_MISMATCH_SCORE: f64 = 0.3;
/// Object literal in a slot whose type cannot be inspected.
pub const OPAQUE_SLOT_SCORE: f64 = 0.5;
/// Object literal whose own shape is unknown.
pub const UNKNOWN_SHAPE_SCORE: f64 = 0.1;
/// Optional declared property the shape does not provide.
pub const OPTIONAL_ABSENT_SCORE: f64 = 0.5;

/// Required-but-absent and unmentioned property names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCoverage {
    /// Required declared properties absent from the shape, in declared order.
    pub missing: Vec<String>,
    /// Shape properties the declared type does not mention, in shape order.
    pub extra: Vec<String>,
}

impl PropertyCoverage {
    /// No missing and no extra properties.
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compare property names of a shape against a declared property list.
pub fn compare_properties(
    inferred: &[PropertySignature],
    declared: &[PropertySignature],
) -> PropertyCoverage {
    let inferred_names: FxHashSet<&str> = inferred.iter().map(|p| p.name.as_str()).collect();
    let declared_names: FxHashSet<&str> = declared.iter().map(|p| p.name.as_str()).collect();

    let mut coverage = PropertyCoverage::default();
    for prop in declared {
        if !prop.optional
            && !inferred_names.contains(prop.name.as_str())
            && !coverage.missing.contains(&prop.name)
        {
            coverage.missing.push(prop.name.clone());
        }
    }
    for prop in inferred {
        if !declared_names.contains(prop.name.as_str()) && !coverage.extra.contains(&prop.name) {
            coverage.extra.push(prop.name.clone());
        }
    }
    coverage
}

/// Score of one property pair and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PropertyVerdict {
    score: f64,
    nested: bool,
}

/// Per-request state: where the literal lives and how deep we are.
struct MatchContext<'s> {
    origin_file: &'s str,
    depth: u32,
    max_depth: u32,
}

impl MatchContext<'_> {
    /// Descend one nested level. Returns `false` at the depth limit, in
    /// which case [`leave`](Self::leave) must not be called.
    fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Scores shapes against declared types from one catalog snapshot.
///
/// Scoring is pure: the scorer only reads the catalog and options, so one
/// scorer can be shared across threads.
pub struct CompatibilityScorer<'a> {
    catalog: &'a TypeCatalog,
    options: &'a MatcherOptions,
}

impl<'a> CompatibilityScorer<'a> {
    pub fn new(catalog: &'a TypeCatalog, options: &'a MatcherOptions) -> Self {
        Self { catalog, options }
    }

    /// Score `shape` against `declared`.
    ///
    /// A shape sharing no property name with the declared type scores 0.
    pub fn score(&self, shape: &InferredShape, declared: &DeclaredType) -> CompatibilityMatch {
        let coverage = compare_properties(shape.properties(), &declared.properties);
        let shares_a_name = shape
            .properties()
            .iter()
            .any(|prop| declared.property(&prop.name).is_some());

        let mut nested_matches = Vec::new();
        let compatibility_score = if shares_a_name {
            let mut ctx = MatchContext {
                origin_file: shape.file_path(),
                depth: 0,
                max_depth: self.options.max_nesting_depth,
            };
            self.weighted_score(
                shape.properties(),
                &declared.properties,
                &mut ctx,
                Some(&mut nested_matches),
            )
        } else {
            0.0
        };

        trace!(
            type_name = %declared.name,
            file = %declared.file_path,
            score = compatibility_score,
            "scored declared type"
        );

        CompatibilityMatch {
            type_name: declared.name.clone(),
            file_path: declared.file_path.clone(),
            location: declared.location,
            compatibility_score,
            is_exact_match: coverage.is_exact(),
            missing_properties: coverage.missing,
            extra_properties: coverage.extra,
            nested_matches,
        }
    }

    /// Score two property lists against each other. Used at the top level
    /// and for every nested object.
    ///
    /// When `record` is given, one [`NestedMatch`] per declared property with
    /// a same-named inferred property is appended, in declared order.
    fn weighted_score(
        &self,
        inferred: &[PropertySignature],
        declared: &[PropertySignature],
        ctx: &mut MatchContext<'_>,
        mut record: Option<&mut Vec<NestedMatch>>,
    ) -> f64 {
        match (inferred.is_empty(), declared.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }

        let mut inferred_by_name: FxHashMap<&str, &PropertySignature> = FxHashMap::default();
        for prop in inferred {
            inferred_by_name.entry(prop.name.as_str()).or_insert(prop);
        }
        let declared_names: FxHashSet<&str> = declared.iter().map(|p| p.name.as_str()).collect();

        let mut sum = 0.0;
        let mut weight = 0.0;

        for decl_prop in declared {
            weight += 1.0;
            if let Some(obj_prop) = inferred_by_name.get(decl_prop.name.as_str()) {
                let verdict = self.property_verdict(obj_prop, decl_prop, ctx);
                sum += verdict.score;
                if let Some(record) = record.as_deref_mut() {
                    record.push(NestedMatch {
                        property_name: decl_prop.name.clone(),
                        score: verdict.score,
                        is_nested: verdict.nested,
                    });
                }
            } else if decl_prop.optional {
                sum += OPTIONAL_ABSENT_SCORE;
            }
        }

        for obj_prop in inferred {
            if !declared_names.contains(obj_prop.name.as_str()) {
                weight += 1.0;
            }
        }

        if weight == 0.0 {
            return 0.0;
        }
        (sum / weight).clamp(0.0, 1.0)
    }

    fn property_verdict(
        &self,
        obj_prop: &PropertySignature,
        decl_prop: &PropertySignature,
        ctx: &mut MatchContext<'_>,
    ) -> PropertyVerdict {
        let verdict = if is_compatible(&obj_prop.type_text, &decl_prop.type_text) {
            PropertyVerdict {
                score: COMPATIBLE_SCORE,
                nested: false,
            }
        } else if obj_prop.is_object_literal() && decl_prop.type_text != OBJECT_TYPE {
            PropertyVerdict {
                score: self.match_nested(obj_prop, decl_prop, ctx),
                nested: true,
            }
        } else {
            PropertyVerdict {
                score: TYPE_MISMATCH_SCORE,
                nested: false,
            }
        };

        trace!(
            property = %decl_prop.name,
            inferred = %obj_prop.type_text,
            declared = %decl_prop.type_text,
            score = verdict.score,
            "property score"
        );
        verdict
    }

    fn match_nested(
        &self,
        obj_prop: &PropertySignature,
        decl_prop: &PropertySignature,
        ctx: &mut MatchContext<'_>,
    ) -> f64 {
        if !ctx.enter() {
            debug!(
                property = %decl_prop.name,
                max_depth = ctx.max_depth,
                "nested match depth exceeded"
            );
            return self.options.depth_exceeded_score;
        }
        let score = self.match_nested_inner(obj_prop, decl_prop, ctx);
        ctx.leave();
        score
    }

    fn match_nested_inner(
        &self,
        obj_prop: &PropertySignature,
        decl_prop: &PropertySignature,
        ctx: &mut MatchContext<'_>,
    ) -> f64 {
        let resolved = bare_reference(&decl_prop.type_text).and_then(|name| {
            self.catalog
                .resolve(&name, ctx.origin_file, self.options.resolution)
        });
        if let Some(resolved) = resolved {
            return match &obj_prop.nested_properties {
                Some(nested) => self.weighted_score(nested, &resolved.properties, ctx, None),
                None => UNKNOWN_SHAPE_SCORE,
            };
        }

        if decl_prop.type_text.contains('{') {
            let inline = parse_inline_type(&decl_prop.type_text);
            return match &obj_prop.nested_properties {
                Some(nested) if !inline.is_empty() => {
                    self.weighted_score(nested, &inline, ctx, None)
                }
                _ => UNKNOWN_SHAPE_SCORE,
            };
        }

        OPAQUE_SLOT_SCORE
    }
}

#[cfg(test)]
#[path = "../tests/scorer_tests.rs"]
mod scorer_tests;
