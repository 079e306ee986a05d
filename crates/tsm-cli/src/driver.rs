//! One matching run: build the catalog, score every shape, collect reports.

use anyhow::Result;
use std::path::Path;
use tracing::{debug_span, info, warn};

use crate::args::CliArgs;
use crate::config;
use crate::proximity::closest_first;
use crate::report::ShapeReport;
use crate::shapes;
use crate::sources::JsonDeclarationSource;
use tsm_matcher::{CatalogStore, InferredShape, RefreshOutcome, TypeMatcher};

/// Run the matcher as configured by `args`, resolving relative paths
/// against `cwd`.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<Vec<ShapeReport>> {
    let options = config::resolve_options(args, cwd)?;
    let source = JsonDeclarationSource::new(cwd.join(&args.catalog));
    let store = CatalogStore::new();

    let paths = source.discover()?;
    if let RefreshOutcome::Completed(stats) = store.refresh(&source, paths) {
        if stats.failed > 0 {
            warn!(failed = stats.failed, "some declaration files were skipped");
        }
        info!(files = stats.updated, "catalog loaded");
    }

    let matcher = TypeMatcher::with_options(store.snapshot(), options);
    let shapes = shapes::load_shapes(&cwd.join(&args.shapes))?;
    Ok(shapes.iter().map(|shape| suggest(&matcher, shape)).collect())
}

/// Ranked suggestions for one shape, closest declarations first among ties.
pub fn suggest(matcher: &TypeMatcher, shape: &InferredShape) -> ShapeReport {
    let location = shape.source_location();
    let _span = debug_span!(
        "shape",
        file = %location.file_path,
        line = location.range.start.line + 1
    )
    .entered();

    ShapeReport {
        location: location.clone(),
        suggestions: matcher.score_all_with(shape, closest_first(shape.file_path())),
    }
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
