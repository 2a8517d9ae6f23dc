//! Navigator orchestration.
//!
//! [`FolderNavigator`] wires the capability traits together and carries the
//! operations exposed to the host's command and settings surfaces: opening
//! the picker, choosing an entry, and editing the persisted settings
//! record. Every settings edit is validated at this boundary and persisted
//! through the [`SettingsStore`] before it returns.

use std::sync::Arc;

use crate::error::{NavResult, NavigatorError};
use crate::exclusion::filter_excluded;
use crate::history;
use crate::models::PickerEntry;
use crate::query::query_entries;
use crate::ranking::rank;
use crate::reveal::{RevealSequencer, RevealTiming};
use crate::settings::{DisplayMode, Settings};
use crate::traits::{Clock, ExplorerHost, FolderSource, FuzzyScorer, NodeLocator, SettingsStore};

/// One picker invocation: the freshly ranked presentation list plus the
/// query narrowing over it.
///
/// The list is a pure projection of (folders, history, exclusions, display
/// mode); reopening the picker rebuilds it from scratch.
pub struct PickerSession {
    entries: Vec<PickerEntry>,
    max_results: usize,
    scorer: Arc<dyn FuzzyScorer>,
}

impl PickerSession {
    /// The full pre-query presentation list.
    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    /// Narrow the list by the typed query, capped at the configured
    /// maximum. An empty query returns the head of the list unfiltered.
    pub fn query(&self, query: &str) -> Vec<PickerEntry> {
        query_entries(&self.entries, query, self.max_results, self.scorer.as_ref())
    }
}

/// The navigation core, generic over its host through trait objects.
pub struct FolderNavigator {
    settings: Settings,
    source: Arc<dyn FolderSource>,
    host: Arc<dyn ExplorerHost>,
    tree: Arc<dyn NodeLocator>,
    scorer: Arc<dyn FuzzyScorer>,
    store: Arc<dyn SettingsStore>,
    clock: Arc<dyn Clock>,
    timing: RevealTiming,
}

impl FolderNavigator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: Settings,
        source: Arc<dyn FolderSource>,
        host: Arc<dyn ExplorerHost>,
        tree: Arc<dyn NodeLocator>,
        scorer: Arc<dyn FuzzyScorer>,
        store: Arc<dyn SettingsStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            source,
            host,
            tree,
            scorer,
            store,
            clock,
            timing: RevealTiming::default(),
        }
    }

    /// Override the reveal delays (tests use short or paused timings).
    pub fn with_timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    /// The current settings record.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Re-read the settings record from the store.
    pub async fn reload_settings(&mut self) -> NavResult<()> {
        self.settings = self.store.load().await?;
        Ok(())
    }

    /// Build a fresh picker session: enumerate, prune exclusions, rank.
    pub fn open_picker(&self) -> PickerSession {
        let folders = filter_excluded(
            self.source.all_folders(),
            &self.settings.excluded_folders,
        );
        let entries = rank(
            folders,
            &self.settings.folder_history,
            self.settings.folder_display_mode,
            self.settings.rank_limits(),
        );
        tracing::debug!(
            entries = entries.len(),
            mode = ?self.settings.folder_display_mode,
            "picker opened"
        );
        PickerSession {
            entries,
            max_results: self.settings.max_results,
            scorer: Arc::clone(&self.scorer),
        }
    }

    /// Handle a picker selection.
    ///
    /// Section markers are a no-op. For a folder, the visit is recorded and
    /// persisted first, then the reveal sequence runs; a sequencing failure
    /// is reported via the log and never reaches the caller, so the history
    /// write can't be lost to a flaky UI.
    pub async fn choose(&mut self, entry: &PickerEntry) {
        let folder = match entry {
            PickerEntry::Section(kind) => {
                tracing::debug!(label = kind.label(), "section marker selected, ignoring");
                return;
            }
            PickerEntry::Folder(folder) => folder.clone(),
        };

        history::record_visit(
            &mut self.settings.folder_history,
            &folder.path,
            self.clock.as_ref(),
        );
        if let Err(e) = self.store.save(&self.settings).await {
            tracing::error!(error = %e, "failed to persist folder history");
        }

        let sequencer = RevealSequencer::with_timing(
            self.host.as_ref(),
            self.tree.as_ref(),
            self.source.as_ref(),
            self.timing,
        );
        if let Err(e) = sequencer
            .reveal(&folder, self.settings.expand_target_folder)
            .await
        {
            tracing::warn!(error = %e, path = %folder.path, "folder reveal did not complete");
        }
    }

    /// Switch the display policy and its promotion limits.
    pub async fn set_display_policy(
        &mut self,
        mode: DisplayMode,
        recent_limit: usize,
        frequent_limit: usize,
    ) -> NavResult<&Settings> {
        if recent_limit == 0 || frequent_limit == 0 {
            return Err(NavigatorError::ConfigInvalid(
                "promotion limits must be at least 1".to_string(),
            ));
        }
        self.settings.folder_display_mode = mode;
        self.settings.recent_folders_to_show = recent_limit;
        self.settings.frequent_folders_to_show = frequent_limit;
        self.persist().await
    }

    /// Record a visit to `path` outside the picker flow.
    pub async fn record_visit(&mut self, path: &str) -> NavResult<&Settings> {
        history::record_visit(&mut self.settings.folder_history, path, self.clock.as_ref());
        self.persist().await
    }

    /// Clear the entire visit history. The settings surface gates this
    /// behind an explicit user confirmation.
    pub async fn reset_history(&mut self) -> NavResult<&Settings> {
        history::reset_all(&mut self.settings.folder_history);
        self.persist().await
    }

    /// Add an excluded path prefix. Duplicates are a no-op.
    pub async fn add_exclusion(&mut self, path: &str) -> NavResult<&Settings> {
        let path = path.trim();
        if path.is_empty() {
            return Err(NavigatorError::ConfigInvalid(
                "excluded path must not be empty".to_string(),
            ));
        }
        if !self.settings.excluded_folders.iter().any(|p| p == path) {
            self.settings.excluded_folders.push(path.to_string());
        }
        self.persist().await
    }

    /// Remove an excluded path prefix.
    pub async fn remove_exclusion(&mut self, path: &str) -> NavResult<&Settings> {
        self.settings.excluded_folders.retain(|p| p != path);
        self.persist().await
    }

    async fn persist(&self) -> NavResult<&Settings> {
        self.store.save(&self.settings).await?;
        Ok(&self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{
        FixedClock, InMemorySettingsStore, MockExplorer, MockTree, StaticFolderSource,
        SubstringScorer,
    };

    fn navigator(paths: &[&str]) -> FolderNavigator {
        FolderNavigator::new(
            Settings::default(),
            Arc::new(StaticFolderSource::from_paths(paths)),
            Arc::new(MockExplorer::new()),
            Arc::new(MockTree::with_collapsed_nodes(paths)),
            Arc::new(SubstringScorer),
            Arc::new(InMemorySettingsStore::new()),
            Arc::new(FixedClock::new(1_000)),
        )
    }

    #[tokio::test]
    async fn test_set_display_policy_rejects_zero_limits() {
        let mut nav = navigator(&["a"]);
        let err = nav
            .set_display_policy(DisplayMode::Recency, 0, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, NavigatorError::ConfigInvalid(_)));
        // Nothing was changed.
        assert_eq!(nav.settings().folder_display_mode, DisplayMode::Default);
    }

    #[tokio::test]
    async fn test_add_exclusion_rejects_empty_and_dedupes() {
        let mut nav = navigator(&["a"]);
        assert!(nav.add_exclusion("   ").await.is_err());

        nav.add_exclusion("archive").await.unwrap();
        nav.add_exclusion("archive").await.unwrap();
        assert_eq!(nav.settings().excluded_folders, vec!["archive"]);

        nav.remove_exclusion("archive").await.unwrap();
        assert!(nav.settings().excluded_folders.is_empty());
    }

    #[tokio::test]
    async fn test_open_picker_applies_exclusions() {
        let mut nav = navigator(&["a", "a/b", "b"]);
        nav.add_exclusion("a").await.unwrap();
        let session = nav.open_picker();
        let paths: Vec<&str> = session.entries().iter().map(|e| e.match_text()).collect();
        assert_eq!(paths, vec!["b"]);
    }
}
