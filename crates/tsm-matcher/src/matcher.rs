//! Entry point: score one inferred shape against a whole catalog.

use crate::catalog::TypeCatalog;
use crate::options::MatcherOptions;
use crate::ranker::MatchRanker;
use crate::scorer::CompatibilityScorer;
use crate::types::{CompatibilityMatch, DeclaredType, InferredShape};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Suggests declared types for inferred shapes against a catalog snapshot.
///
/// The matcher keeps no cache of its own; [`refresh`](Self::refresh) simply
/// swaps in the snapshot subsequent requests score against.
#[derive(Debug, Clone)]
pub struct TypeMatcher {
    catalog: Arc<TypeCatalog>,
    options: MatcherOptions,
}

impl TypeMatcher {
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self::with_options(catalog, MatcherOptions::default())
    }

    pub fn with_options(catalog: Arc<TypeCatalog>, options: MatcherOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Score subsequent requests against `catalog`.
    pub fn refresh(&mut self, catalog: Arc<TypeCatalog>) {
        self.catalog = catalog;
    }

    /// Score `shape` against a single declared type.
    pub fn score(&self, shape: &InferredShape, declared: &DeclaredType) -> CompatibilityMatch {
        CompatibilityScorer::new(&self.catalog, &self.options).score(shape, declared)
    }

    /// Ranked candidates for `shape`, best first.
    pub fn score_all(&self, shape: &InferredShape) -> Vec<CompatibilityMatch> {
        let ranker = MatchRanker::from_options(&self.options);
        ranker.rank(self.candidates(shape))
    }

    /// Ranked candidates for `shape`, with `tie_break` ordering equal scores.
    pub fn score_all_with<F>(&self, shape: &InferredShape, tie_break: F) -> Vec<CompatibilityMatch>
    where
        F: Fn(&CompatibilityMatch, &CompatibilityMatch) -> Ordering,
    {
        let ranker = MatchRanker::from_options(&self.options).with_tie_breaker(tie_break);
        ranker.rank(self.candidates(shape))
    }

    /// Unranked scores against every declared type, in catalog order.
    fn candidates(&self, shape: &InferredShape) -> Vec<CompatibilityMatch> {
        score_catalog(&self.catalog, &self.options, shape)
    }
}

/// Ranked candidates for `shape` using default options.
pub fn score_all(shape: &InferredShape, catalog: &TypeCatalog) -> Vec<CompatibilityMatch> {
    let options = MatcherOptions::default();
    MatchRanker::from_options(&options).rank(score_catalog(catalog, &options, shape))
}

fn score_catalog(
    catalog: &TypeCatalog,
    options: &MatcherOptions,
    shape: &InferredShape,
) -> Vec<CompatibilityMatch> {
    if shape.is_empty() {
        return Vec::new();
    }

    let scorer = CompatibilityScorer::new(catalog, options);
    let declared: Vec<&DeclaredType> = catalog.iter().collect();
    let matches: Vec<CompatibilityMatch> = if options.parallel {
        declared
            .par_iter()
            .map(|declared| scorer.score(shape, declared))
            .collect()
    } else {
        declared
            .iter()
            .map(|declared| scorer.score(shape, declared))
            .collect()
    };

    debug!(
        file = %shape.file_path(),
        candidates = matches.len(),
        positive = matches.iter().filter(|m| m.compatibility_score > 0.0).count(),
        "scored inferred shape"
    );
    matches
}

#[cfg(test)]
#[path = "../tests/matcher_tests.rs"]
mod matcher_tests;
