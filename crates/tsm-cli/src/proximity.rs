//! Tie-breaking by file proximity.
//!
//! When two declared types score the same, the one declared closer to the
//! object literal is listed first: the literal's own file, then the file
//! sharing the most leading directories.

use std::cmp::Ordering;

use tsm_matcher::CompatibilityMatch;
use tsm_matcher::catalog::shared_directory_depth;

/// Comparator ordering matches closest to `origin` first.
pub fn closest_first(
    origin: &str,
) -> impl Fn(&CompatibilityMatch, &CompatibilityMatch) -> Ordering + '_ {
    move |a, b| proximity(origin, &b.file_path).cmp(&proximity(origin, &a.file_path))
}

fn proximity(origin: &str, file_path: &str) -> (bool, usize) {
    (file_path == origin, shared_directory_depth(origin, file_path))
}
