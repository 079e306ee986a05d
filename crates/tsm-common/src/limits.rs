//! Centralized limits and thresholds for the structural type matcher.
//!
//! This module provides shared constants for recursion depths and result
//! counts used throughout the codebase. Centralizing these values:
//! - Prevents duplicate definitions with inconsistent values
//! - Gives `MatcherOptions` a single place to take its defaults from
//! - Documents the rationale for each limit
//!
//! # Categories
//!
//! - **Recursion Depths**: Limits to prevent stack overflow in nested matching
//! - **Fallback Scores**: Partial credit handed out when a limit is hit
//! - **Capacity Limits**: Maximum result counts for presentation

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum depth for nested shape matching.
///
/// Each nested object literal whose declared slot is another structural type
/// (or an inline object type) adds one level of recursion to the scorer. The
/// recursion is naturally bounded by how deeply the literal is nested, but a
/// generated or pathological literal can nest far enough to exhaust the
/// stack. Past this depth the scorer stops descending and hands out
/// [`DEPTH_EXCEEDED_SCORE`].
///
/// # TypeScript example
///
/// ```typescript
/// interface Node { child: Node; value: string }
///
/// // Every `child` level below is one more nested match:
/// const tree = { value: "a", child: { value: "b", child: { value: "c", child: { /* ... */ } } } };
/// ```
pub const MAX_NESTED_MATCH_DEPTH: u32 = 32;

// =============================================================================
// Fallback Scores
// =============================================================================

/// Score given to a nested match abandoned because of [`MAX_NESTED_MATCH_DEPTH`].
///
/// Matches the credit given to an object placed in an opaque, non-primitive
/// declared slot: the literal is an object, the slot expects one, nothing
/// further was verified.
pub const DEPTH_EXCEEDED_SCORE: f64 = 0.5;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Default number of suggestions shown per object literal by the CLI.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;
