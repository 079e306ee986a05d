//! Object literals to match, as handed over by the source parser.
//!
//! A shapes file is a JSON array; each entry locates one object literal and
//! lists its entries in source order:
//!
//! ```json
//! [
//!   {
//!     "location": { "filePath": "src/app.ts", "range": { "start": { "line": 4, "character": 14 }, "end": { "line": 4, "character": 40 } } },
//!     "entries": [["id", { "kind": "number" }], ["name", { "kind": "string" }]]
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use tsm_common::Location;
use tsm_matcher::{InferredShape, LiteralValue, infer_shape};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapeEntry {
    location: Location,
    #[serde(default)]
    entries: Vec<(String, LiteralValue)>,
}

/// Parse shapes from JSON text.
pub fn parse_shapes(text: &str) -> Result<Vec<InferredShape>> {
    let entries: Vec<ShapeEntry> = serde_json::from_str(text)?;
    Ok(entries
        .into_iter()
        .map(|entry| infer_shape(&entry.entries, entry.location))
        .collect())
}

/// Read and parse a shapes file.
pub fn load_shapes(path: &Path) -> Result<Vec<InferredShape>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shapes: {}", path.display()))?;
    parse_shapes(&text).with_context(|| format!("failed to parse shapes: {}", path.display()))
}
