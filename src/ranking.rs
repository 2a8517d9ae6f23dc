//! Ranking engine.
//!
//! Turns the filtered folder set into the picker's presentation list
//! according to the active display mode. `Default` passes the natural
//! (alphabetical-by-path) order through unchanged. `Recency` and
//! `Frequency` promote a bounded number of history-bearing folders into a
//! marked section at the top; everyone else, including promotion overflow,
//! follows in natural order under an "All folders" marker. Markers are only
//! emitted when the promoted section is non-empty.
//!
//! Sorting is stable by construction: folders with equal sort keys keep
//! their natural relative order, so output is deterministic.

use std::collections::HashSet;

use crate::history::FolderHistory;
use crate::models::{Folder, PickerEntry, SectionKind};
use crate::settings::DisplayMode;

/// How many folders each promoting mode may lift to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankLimits {
    pub recent: usize,
    pub frequent: usize,
}

impl Default for RankLimits {
    fn default() -> Self {
        Self {
            recent: 5,
            frequent: 5,
        }
    }
}

/// Produce the ordered presentation list for `folders`.
pub fn rank(
    folders: Vec<Folder>,
    history: &FolderHistory,
    mode: DisplayMode,
    limits: RankLimits,
) -> Vec<PickerEntry> {
    let (section, limit, key): (SectionKind, usize, fn(&FolderHistory, &str) -> i64) = match mode {
        DisplayMode::Default => {
            return folders.into_iter().map(PickerEntry::Folder).collect();
        }
        DisplayMode::Recency => (SectionKind::RecentlyVisited, limits.recent, |h, p| {
            h.get(p).map(|r| r.last_accessed).unwrap_or(0)
        }),
        DisplayMode::Frequency => (SectionKind::FrequentlyVisited, limits.frequent, |h, p| {
            h.get(p).map(|r| r.access_count as i64).unwrap_or(0)
        }),
    };

    // Promote history-bearing folders, sorted descending by the mode's key.
    // sort_by is stable, so ties keep their natural order.
    let mut promoted: Vec<Folder> = folders
        .iter()
        .filter(|f| history.contains_key(&f.path))
        .cloned()
        .collect();
    promoted.sort_by(|a, b| key(history, &b.path).cmp(&key(history, &a.path)));
    promoted.truncate(limit);

    if promoted.is_empty() {
        // No promoted section means no markers at all.
        return folders.into_iter().map(PickerEntry::Folder).collect();
    }

    tracing::debug!(mode = ?mode, promoted = promoted.len(), "built promoted folder section");

    let promoted_paths: HashSet<&str> = promoted.iter().map(|f| f.path.as_str()).collect();
    let remaining: Vec<Folder> = folders
        .iter()
        .filter(|f| !promoted_paths.contains(f.path.as_str()))
        .cloned()
        .collect();

    let mut entries = Vec::with_capacity(folders.len() + 2);
    entries.push(PickerEntry::Section(section));
    entries.extend(promoted.into_iter().map(PickerEntry::Folder));
    entries.push(PickerEntry::Section(SectionKind::AllFolders));
    entries.extend(remaining.into_iter().map(PickerEntry::Folder));
    entries
}
