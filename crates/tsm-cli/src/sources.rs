//! Declaration files on disk.
//!
//! An extractor writes one JSON file per source file it scanned, mirroring
//! the source tree under a catalog directory: the declarations of
//! `src/models/user.ts` live in `<catalog>/src/models/user.ts.json`.
//!
//! ```json
//! {
//!   "declarations": [
//!     {
//!       "name": "User",
//!       "location": { "start": { "line": 3, "character": 0 }, "end": { "line": 7, "character": 1 } },
//!       "members": [
//!         { "name": "id", "type": { "kind": "keyword", "keyword": "number" } },
//!         { "name": "profile", "optional": true, "type": { "kind": "reference", "text": "UserProfile" } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use tsm_common::Range;
use tsm_matcher::{DeclarationSource, DeclaredType, MemberNode, declared_properties};

/// Suffix appended to a source path to name its declaration file.
pub const DECLARATION_SUFFIX: &str = ".json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeclarationFile {
    #[serde(default)]
    declarations: Vec<DeclarationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeclarationEntry {
    name: String,
    #[serde(default)]
    location: Range,
    #[serde(default)]
    members: Vec<MemberNode>,
}

/// Reads declared types from a catalog directory of declaration files.
#[derive(Debug, Clone)]
pub struct JsonDeclarationSource {
    root: PathBuf,
}

impl JsonDeclarationSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source paths of every declaration file under the root, sorted.
    pub fn discover(&self) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("failed to walk catalog: {}", self.root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(source_path) = self.source_path(entry.path()) {
                paths.push(source_path);
            }
        }
        debug!(root = %self.root.display(), files = paths.len(), "discovered declaration files");
        Ok(paths)
    }

    /// Declaration file holding the declarations of `source_path`.
    pub fn declaration_file(&self, source_path: &str) -> PathBuf {
        self.root.join(format!("{source_path}{DECLARATION_SUFFIX}"))
    }

    /// Source path a declaration file stands for, with `/` separators.
    fn source_path(&self, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(&self.root).ok()?;
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        relative
            .strip_suffix(DECLARATION_SUFFIX)
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
    }
}

impl DeclarationSource for JsonDeclarationSource {
    fn declared_types(&self, file_path: &str) -> Result<Vec<DeclaredType>> {
        let path = self.declaration_file(file_path);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read declarations: {}", path.display()))?;
        let file: DeclarationFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse declarations: {}", path.display()))?;

        Ok(file
            .declarations
            .into_iter()
            .map(|entry| {
                DeclaredType::new(entry.name, file_path, declared_properties(&entry.members))
                    .with_location(entry.location)
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../tests/sources_tests.rs"]
mod sources_tests;
