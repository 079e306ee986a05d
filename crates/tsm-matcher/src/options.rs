//! Matcher configuration.
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) gives the standard behavior.

use crate::catalog::ResolutionOrder;
use serde::{Deserialize, Deserializer, Serialize};
use tsm_common::limits::{DEPTH_EXCEEDED_SCORE, MAX_NESTED_MATCH_DEPTH};

/// Deserialize a boolean that may also be written as a string.
///
/// Accepts `"parallel": "true"` as well as `"parallel": true`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                s
            ))),
        },
    }
}

fn default_max_nesting_depth() -> u32 {
    MAX_NESTED_MATCH_DEPTH
}

fn default_depth_exceeded_score() -> f64 {
    DEPTH_EXCEEDED_SCORE
}

fn default_parallel() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherOptions {
    /// Nested matches deeper than this fail soft with `depth_exceeded_score`.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: u32,
    #[serde(default = "default_depth_exceeded_score")]
    pub depth_exceeded_score: f64,
    /// Which declaration wins when a referenced name is declared in several files.
    #[serde(default)]
    pub resolution: ResolutionOrder,
    /// Score declared types on the rayon thread pool.
    #[serde(
        default = "default_parallel",
        deserialize_with = "deserialize_bool_or_string"
    )]
    pub parallel: bool,
    /// Matches scoring at or below this are dropped. Zero-score matches are
    /// always dropped.
    #[serde(default)]
    pub min_score: f64,
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: default_max_nesting_depth(),
            depth_exceeded_score: default_depth_exceeded_score(),
            resolution: ResolutionOrder::default(),
            parallel: default_parallel(),
            min_score: 0.0,
            max_results: None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
