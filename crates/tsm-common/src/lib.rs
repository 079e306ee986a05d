//! Common types and utilities for the tsm structural type matcher.
//!
//! This crate provides foundational types used across all tsm crates:
//! - Source locations (`Position`, `Range`, `Location`)
//! - Matcher limits and thresholds

// Position/Range types for line/column source locations
pub mod position;
pub use position::{Location, Position, Range};

// Centralized limits and thresholds
pub mod limits;
