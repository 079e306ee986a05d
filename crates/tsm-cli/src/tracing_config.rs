//! Logging setup for the `tsm` binary.
//!
//! `TSM_LOG` selects what is logged. A bare level (`TSM_LOG=debug`) applies
//! to the matcher crates only and keeps everything else at `warn`; any value
//! with a target or a comma is used verbatim as an `EnvFilter` directive
//! list. `RUST_LOG` is honored when `TSM_LOG` is unset.
//!
//! `TSM_LOG_FORMAT` picks the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented output via `tracing-tree`, grouped under the span of
//!   the shape being matched (use `--sequential` to keep scorer events
//!   inside it)
//! - `json`: one JSON object per event
//!
//! ```bash
//! # Why did a type score the way it did?
//! TSM_LOG=trace TSM_LOG_FORMAT=tree tsm -c decls -s shapes.json
//!
//! # Catalog scans only
//! TSM_LOG=tsm_matcher::store=debug tsm -c decls -s shapes.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Crates whose events a bare `TSM_LOG` level applies to.
const MATCHER_TARGETS: &[&str] = &["tsm_matcher", "tsm_cli"];

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `TSM_LOG_FORMAT` value; anything unrecognized is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Expand a `TSM_LOG` value into `EnvFilter` directives.
pub fn filter_directives(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value.contains('=') || value.contains(',') {
        return value.to_string();
    }
    let mut directives = vec!["warn".to_string()];
    directives.extend(MATCHER_TARGETS.iter().map(|target| format!("{target}={value}")));
    directives.join(",")
}

fn build_filter(tsm_log: Option<String>) -> EnvFilter {
    match tsm_log {
        Some(value) => EnvFilter::builder().parse_lossy(filter_directives(&value)),
        None => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TSM_LOG` nor `RUST_LOG` is set. All output goes
/// to stderr so it never mixes with suggestions printed on stdout.
pub fn init_tracing() {
    let tsm_log = std::env::var("TSM_LOG").ok();
    if tsm_log.is_none() && std::env::var("RUST_LOG").is_err() {
        return;
    }

    let filter = build_filter(tsm_log);
    let format = LogFormat::parse(&std::env::var("TSM_LOG_FORMAT").unwrap_or_default());

    match format {
        LogFormat::Tree => {
            // Targets are redundant under the per-shape spans.
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(false);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
