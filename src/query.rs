//! Fuzzy query layer.
//!
//! A thin contract around the host's fuzzy-match primitive: narrows the
//! ranking engine's presentation list to the entries matching the typed
//! query, ordered by score with the pre-query order as tie-break, capped at
//! the configured maximum. Section markers participate with their own label
//! as match text; selecting one is still a no-op downstream.

use crate::models::PickerEntry;
use crate::traits::FuzzyScorer;

/// Filter `entries` by `query`, returning at most `max_results` entries.
///
/// An empty query returns the first `max_results` entries unfiltered,
/// preserving the engine's order.
pub fn query_entries(
    entries: &[PickerEntry],
    query: &str,
    max_results: usize,
    scorer: &dyn FuzzyScorer,
) -> Vec<PickerEntry> {
    if query.is_empty() {
        return entries.iter().take(max_results).cloned().collect();
    }

    let mut scored: Vec<(i64, &PickerEntry)> = entries
        .iter()
        .filter_map(|entry| {
            scorer
                .score(query, entry.match_text())
                .map(|score| (score, entry))
        })
        .collect();
    // Stable sort: equal scores keep the pre-query order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(max_results)
        .map(|(_, entry)| entry.clone())
        .collect()
}
