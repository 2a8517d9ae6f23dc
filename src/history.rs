//! Folder visit history.
//!
//! A flat map from folder path to visit statistics, stored inside the
//! persisted settings record. Entries materialize on first visit, are
//! updated in place on every later visit, and are only ever removed all at
//! once by an explicit reset. A stale entry for a deleted folder is
//! harmless: it simply never matches a live folder again.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::traits::Clock;

/// Visit statistics for one folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    /// Epoch milliseconds of the most recent visit.
    pub last_accessed: i64,
    /// Total number of visits. Only ever increases.
    pub access_count: u64,
}

/// Visit statistics keyed by folder path.
pub type FolderHistory = HashMap<String, VisitRecord>;

/// Record a visit to `path`: first visit creates `(now, 1)`, later visits
/// bump the timestamp and count.
///
/// The caller owns persistence; this only mutates the in-memory map.
pub fn record_visit(history: &mut FolderHistory, path: &str, clock: &dyn Clock) {
    let now = clock.now_millis();
    let record = history.entry(path.to_string()).or_insert(VisitRecord {
        last_accessed: 0,
        access_count: 0,
    });
    record.last_accessed = now;
    record.access_count += 1;
    tracing::debug!(path, count = record.access_count, "recorded folder visit");
}

/// Clear every history entry. Only invoked behind an explicit user
/// confirmation in the settings surface.
pub fn reset_all(history: &mut FolderHistory) {
    let cleared = history.len();
    history.clear();
    tracing::debug!(cleared, "folder history reset");
}
