//! Ordering of scored matches for presentation.
//!
//! Matches are sorted by score, highest first. Scores that tie are ordered by
//! an optional caller-supplied comparator (typically file proximity, which
//! only the presentation layer knows about). The sort is stable, so without
//! a comparator tied matches keep their incoming order.

use crate::options::MatcherOptions;
use crate::types::CompatibilityMatch;
use std::cmp::Ordering;

/// Secondary ordering applied to matches with equal scores.
pub type TieBreaker<'a> = Box<dyn Fn(&CompatibilityMatch, &CompatibilityMatch) -> Ordering + 'a>;

/// Filters, sorts and truncates scored matches.
pub struct MatchRanker<'a> {
    min_score: f64,
    max_results: Option<usize>,
    tie_breaker: Option<TieBreaker<'a>>,
}

impl<'a> MatchRanker<'a> {
    /// A ranker that keeps every match with a positive score.
    pub fn new() -> Self {
        Self {
            min_score: 0.0,
            max_results: None,
            tie_breaker: None,
        }
    }

    /// A ranker using the thresholds from `options`.
    pub fn from_options(options: &MatcherOptions) -> Self {
        Self {
            min_score: options.min_score.max(0.0),
            max_results: options.max_results,
            tie_breaker: None,
        }
    }

    /// Builder: break score ties with `compare`.
    pub fn with_tie_breaker<F>(mut self, compare: F) -> Self
    where
        F: Fn(&CompatibilityMatch, &CompatibilityMatch) -> Ordering + 'a,
    {
        self.tie_breaker = Some(Box::new(compare));
        self
    }

    /// Builder: keep at most `max_results` matches.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Drop matches scoring at or below the threshold, then sort by score
    /// descending.
    pub fn rank(&self, matches: Vec<CompatibilityMatch>) -> Vec<CompatibilityMatch> {
        let mut ranked: Vec<CompatibilityMatch> = matches
            .into_iter()
            .filter(|m| m.compatibility_score > self.min_score)
            .collect();

        ranked.sort_by(|a, b| {
            let primary = b.compatibility_score.total_cmp(&a.compatibility_score);
            match &self.tie_breaker {
                Some(compare) => primary.then_with(|| compare(a, b)),
                None => primary,
            }
        });

        if let Some(max_results) = self.max_results {
            ranked.truncate(max_results);
        }
        ranked
    }
}

/// Rank with default settings: positive scores only, no tie-breaker.
pub fn rank_matches(matches: Vec<CompatibilityMatch>) -> Vec<CompatibilityMatch> {
    MatchRanker::new().rank(matches)
}

#[cfg(test)]
#[path = "../tests/ranker_tests.rs"]
mod ranker_tests;
