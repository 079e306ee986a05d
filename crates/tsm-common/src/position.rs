//! Position and location utilities.
//!
//! Declared types and inferred shapes are reported to the editor with
//! line/column ranges. The matcher never interprets these values; it only
//! carries them through to the produced matches.

use serde::{Deserialize, Serialize};

/// A position in a source file (0-indexed line and column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (UTF-16 code units, as editors report them)
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// A range in a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }
}

/// A location in a source file (file path + range).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub file_path: String,
    #[serde(default)]
    pub range: Range,
}

impl Location {
    pub fn new(file_path: impl Into<String>, range: Range) -> Self {
        Location {
            file_path: file_path.into(),
            range,
        }
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod position_tests;
