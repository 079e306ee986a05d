//! Loading matcher options from a config file and the command line.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::args::CliArgs;
use tsm_common::limits::DEFAULT_MAX_SUGGESTIONS;
use tsm_matcher::MatcherOptions;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tsm.json";

/// Parse a matcher config file.
pub fn load_options(path: &Path) -> Result<MatcherOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Config file to use: the explicit one (relative to `cwd`), or `tsm.json`
/// under `cwd` if it exists.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(cwd.join(path)),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Resolve the effective options: defaults, then the config file, then flags.
///
/// The CLI always caps suggestions, at [`DEFAULT_MAX_SUGGESTIONS`] unless
/// configured otherwise.
pub fn resolve_options(args: &CliArgs, cwd: &Path) -> Result<MatcherOptions> {
    let mut options = match find_config(args.config.as_deref(), cwd) {
        Some(path) => {
            debug!(config = %path.display(), "loading matcher config");
            load_options(&path)?
        }
        None => MatcherOptions::default(),
    };

    if let Some(max_results) = args.max_results {
        options.max_results = Some(max_results);
    }
    if let Some(min_score) = args.min_score {
        options.min_score = min_score;
    }
    if let Some(max_depth) = args.max_depth {
        options.max_nesting_depth = max_depth;
    }
    if let Some(resolution) = args.resolution {
        options.resolution = resolution.into();
    }
    if args.sequential {
        options.parallel = false;
    }
    if options.max_results.is_none() {
        options.max_results = Some(DEFAULT_MAX_SUGGESTIONS);
    }

    Ok(options)
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
