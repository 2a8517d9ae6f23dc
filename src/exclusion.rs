//! Exclusion filter.
//!
//! A folder is excluded when its path, or any ancestor's path, matches a
//! configured prefix. Matching is segment-aligned: both sides are
//! normalized to a trailing `/` before comparison, so rule `a/bc` excludes
//! `a/bc` and `a/bc/d` but never `a/bcd`.

use crate::models::Folder;

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Whether `path` is excluded by any prefix in `excluded`.
///
/// Pure, O(|excluded|). An empty set excludes nothing.
pub fn is_path_excluded(path: &str, excluded: &[String]) -> bool {
    if excluded.is_empty() {
        return false;
    }
    let normalized = with_trailing_slash(path);
    excluded
        .iter()
        .any(|rule| normalized.starts_with(&with_trailing_slash(rule)))
}

/// Drop every excluded folder from `folders`, preserving order.
pub fn filter_excluded(folders: Vec<Folder>, excluded: &[String]) -> Vec<Folder> {
    if excluded.is_empty() {
        return folders;
    }
    let total = folders.len();
    let kept: Vec<Folder> = folders
        .into_iter()
        .filter(|folder| !is_path_excluded(&folder.path, excluded))
        .collect();
    tracing::debug!(total, kept = kept.len(), "applied folder exclusions");
    kept
}
