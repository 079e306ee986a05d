//! Catalog of declared structural types, keyed by the file declaring them.
//!
//! The catalog is a plain value. Each file's declarations sit behind an
//! `Arc<[DeclaredType]>`, so cloning a catalog copies one pointer per file
//! and replacing a file never disturbs readers holding an older snapshot
//! (see [`crate::store::CatalogStore`]).
//!
//! # Name resolution
//!
//! Type names are only unique per file. Two lookups are provided and the
//! order they consult files in is fixed:
//! - [`TypeCatalog::lookup_by_name`]: files in insertion order, first hit wins.
//! - [`TypeCatalog::lookup_nearest`]: a declaration in the origin file wins,
//!   then the file sharing the most leading directories with the origin, with
//!   insertion order breaking ties.

use crate::types::DeclaredType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// How a referenced type name is resolved when several files declare it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionOrder {
    /// Prefer the declaration closest to the literal being matched.
    #[default]
    NearestFile,
    /// First file added to the catalog wins.
    InsertionOrder,
}

/// Mapping from file path to the structural types declared in it.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    files: IndexMap<String, Arc<[DeclaredType]>>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(file, declarations)` pairs.
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, Vec<DeclaredType>)>,
        P: Into<String>,
    {
        let mut catalog = Self::new();
        for (path, types) in files {
            catalog.replace_file(path, types);
        }
        catalog
    }

    /// Replace every declaration of `file_path` in one step.
    ///
    /// A file already in the catalog keeps its position in the iteration
    /// order; a new file is appended.
    pub fn replace_file(&mut self, file_path: impl Into<String>, types: Vec<DeclaredType>) {
        self.files.insert(file_path.into(), types.into());
    }

    /// Drop every declaration of `file_path`. Returns `true` if it was present.
    pub fn remove_file(&mut self, file_path: &str) -> bool {
        self.files.shift_remove(file_path).is_some()
    }

    /// Declarations of a single file.
    pub fn declared_types_in(&self, file_path: &str) -> Option<&[DeclaredType]> {
        self.files.get(file_path).map(|types| &types[..])
    }

    /// Files in iteration order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Every declared type, file by file in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &DeclaredType> {
        self.files.values().flat_map(|types| types.iter())
    }

    /// Total number of declared types.
    pub fn len(&self) -> usize {
        self.files.values().map(|types| types.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.values().all(|types| types.is_empty())
    }

    /// First declaration named `name`, ignoring generic arguments.
    pub fn lookup_by_name(&self, name: &str) -> Option<&DeclaredType> {
        let name = strip_type_arguments(name);
        self.iter().find(|declared| declared.name == name)
    }

    /// Declaration named `name` closest to `origin_file`, ignoring generic
    /// arguments.
    pub fn lookup_nearest(&self, name: &str, origin_file: &str) -> Option<&DeclaredType> {
        let name = strip_type_arguments(name);
        let mut best: Option<(usize, &DeclaredType)> = None;

        for (path, types) in &self.files {
            let Some(declared) = types.iter().find(|declared| declared.name == name) else {
                continue;
            };
            if path == origin_file {
                return Some(declared);
            }
            let rank = shared_directory_depth(path, origin_file);
            if best.is_none_or(|(best_rank, _)| rank > best_rank) {
                best = Some((rank, declared));
            }
        }

        best.map(|(_, declared)| declared)
    }

    /// Resolve `name` according to `order`.
    ///
    /// `origin_file` is ignored for [`ResolutionOrder::InsertionOrder`] and
    /// when empty.
    pub fn resolve(
        &self,
        name: &str,
        origin_file: &str,
        order: ResolutionOrder,
    ) -> Option<&DeclaredType> {
        match order {
            ResolutionOrder::NearestFile if !origin_file.is_empty() => {
                self.lookup_nearest(name, origin_file)
            }
            _ => self.lookup_by_name(name),
        }
    }
}

/// Type text with its generic argument list removed: `Page<User>` → `Page`,
/// `Page<User>[]` → `Page[]`.
///
/// Everything from the first `<` to the last `>` is dropped; text after the
/// argument list is kept.
pub fn strip_type_arguments(text: &str) -> String {
    let text = text.trim();
    match (text.find('<'), text.rfind('>')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}{}", &text[..open], &text[close + 1..])
                .trim()
                .to_string()
        }
        _ => text.to_string(),
    }
}

/// Name of the type `text` refers to, if it is a bare (possibly generic)
/// reference. Arrays, unions and inline objects of references are not.
pub fn bare_reference(text: &str) -> Option<String> {
    let name = strip_type_arguments(text);
    is_identifier(&name).then_some(name)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Number of leading directory components two file paths have in common.
pub fn shared_directory_depth(a: &str, b: &str) -> usize {
    let (Some(a_dir), Some(b_dir)) = (Path::new(a).parent(), Path::new(b).parent()) else {
        return 0;
    };
    a_dir
        .components()
        .zip(b_dir.components())
        .take_while(|(left, right)| left == right)
        .count()
}

#[cfg(test)]
#[path = "../tests/catalog_tests.rs"]
mod catalog_tests;
