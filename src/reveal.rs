//! Reveal sequencer.
//!
//! Drives the host tree view to a chosen folder: focuses the panel, expands
//! the ancestor chain root-to-leaf, optionally expands the target itself,
//! then scrolls to and temporarily highlights it.
//!
//! The host UI applies reveals asynchronously, so every DOM-dependent step
//! runs after a short settle delay and node lookups poll a few times before
//! giving up. Steps are strictly sequential: each ancestor's delay fully
//! elapses before the next ancestor is touched, because expanding a child
//! node is only meaningful once its parent's node exists.
//!
//! Stages: `Idle -> LeafVisible -> ParentsExpanding -> TargetExpanding ->
//! Highlighted -> Idle`. A missing panel fails fast (not transient); a
//! missing node skips its own step; nothing already applied is rolled back.

use std::time::Duration;

use tokio::time::sleep;

use crate::error::{NavResult, NavigatorError};
use crate::models::Folder;
use crate::traits::{ExplorerHost, FolderSource, NodeId, NodeLocator};

/// Named inter-stage delays of the reveal protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Wait after focusing the panel, before the first ancestor.
    pub initial_settle: Duration,
    /// Wait between consecutive ancestor expansions.
    pub step: Duration,
    /// Wait between locate attempts for a node that has not appeared yet.
    pub locate_poll: Duration,
    /// How many locate attempts before giving up on a node.
    pub locate_attempts: u32,
    /// Wait after the target's reveal/expand, before highlighting.
    pub expand_settle: Duration,
    /// How long the highlight stays on the target.
    pub highlight_dwell: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            initial_settle: Duration::from_millis(100),
            step: Duration::from_millis(50),
            locate_poll: Duration::from_millis(50),
            locate_attempts: 3,
            expand_settle: Duration::from_millis(200),
            highlight_dwell: Duration::from_millis(2000),
        }
    }
}

/// Protocol stage, logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Idle,
    LeafVisible,
    ParentsExpanding,
    TargetExpanding,
    Highlighted,
}

/// Sequences a single reveal run against the host surfaces.
///
/// The sequencer is stateless between runs; callers never start a second
/// run while one is active (selecting a folder dismisses the picker that is
/// the only entry point).
pub struct RevealSequencer<'a> {
    host: &'a dyn ExplorerHost,
    tree: &'a dyn NodeLocator,
    source: &'a dyn FolderSource,
    timing: RevealTiming,
}

impl<'a> RevealSequencer<'a> {
    pub fn new(
        host: &'a dyn ExplorerHost,
        tree: &'a dyn NodeLocator,
        source: &'a dyn FolderSource,
    ) -> Self {
        Self::with_timing(host, tree, source, RevealTiming::default())
    }

    pub fn with_timing(
        host: &'a dyn ExplorerHost,
        tree: &'a dyn NodeLocator,
        source: &'a dyn FolderSource,
        timing: RevealTiming,
    ) -> Self {
        Self {
            host,
            tree,
            source,
            timing,
        }
    }

    /// Reveal `target` in the tree view and highlight it.
    ///
    /// Errors degrade to "stop advancing": whatever was already expanded
    /// stays expanded. The caller reports the error; it never bubbles into
    /// the picker flow.
    pub async fn reveal(&self, target: &Folder, expand_target: bool) -> NavResult<()> {
        self.transition(RevealStage::Idle, RevealStage::LeafVisible, &target.path);
        // A missing panel is not transient: fail fast, no retries.
        self.host.focus_panel()?;
        sleep(self.timing.initial_settle).await;

        self.transition(
            RevealStage::LeafVisible,
            RevealStage::ParentsExpanding,
            &target.path,
        );
        for ancestor in self.ancestor_chain(target) {
            self.host.reveal(&ancestor)?;
            self.try_expand(&ancestor).await;
            // The next ancestor's node only exists once this one settled.
            sleep(self.timing.step).await;
        }

        self.transition(
            RevealStage::ParentsExpanding,
            RevealStage::TargetExpanding,
            &target.path,
        );
        self.host.reveal(target)?;
        if expand_target {
            self.try_expand(target).await;
        }
        sleep(self.timing.expand_settle).await;

        let node = self
            .locate_with_retry(target)
            .await
            .ok_or_else(|| NavigatorError::NodeNotFound {
                path: target.path.clone(),
            })?;
        self.transition(
            RevealStage::TargetExpanding,
            RevealStage::Highlighted,
            &target.path,
        );
        self.tree.scroll_into_view(node);
        self.tree.set_highlighted(node, true);
        sleep(self.timing.highlight_dwell).await;
        self.tree.set_highlighted(node, false);

        self.transition(RevealStage::Highlighted, RevealStage::Idle, &target.path);
        Ok(())
    }

    /// The target's ancestors, root first, exclusive of the target.
    fn ancestor_chain(&self, target: &Folder) -> Vec<Folder> {
        let mut chain = Vec::new();
        let mut parent = target.parent.clone();
        while let Some(path) = parent {
            match self.source.folder_by_path(&path) {
                Some(folder) => {
                    parent = folder.parent.clone();
                    chain.push(folder);
                }
                None => {
                    tracing::warn!(path = %path, "ancestor missing from folder source");
                    break;
                }
            }
        }
        chain.reverse();
        chain
    }

    /// Locate a node, polling while the host UI catches up.
    async fn locate_with_retry(&self, folder: &Folder) -> Option<NodeId> {
        for attempt in 0..self.timing.locate_attempts {
            if let Some(node) = self.tree.locate(&folder.path, &folder.name) {
                return Some(node);
            }
            if attempt + 1 < self.timing.locate_attempts {
                sleep(self.timing.locate_poll).await;
            }
        }
        None
    }

    /// Expand a folder's node if it is present and collapsed.
    ///
    /// A node that never appears is skipped silently: the folder may be
    /// already expanded out of view, or the UI is still lagging.
    async fn try_expand(&self, folder: &Folder) {
        match self.locate_with_retry(folder).await {
            Some(node) => {
                if self.tree.is_collapsed(node) {
                    self.tree.expand(node);
                } else {
                    tracing::debug!(path = %folder.path, "folder already expanded");
                }
            }
            None => {
                tracing::debug!(path = %folder.path, "node not found, skipping expand");
            }
        }
    }

    fn transition(&self, from: RevealStage, to: RevealStage, path: &str) {
        tracing::debug!(?from, ?to, path, "reveal stage transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockExplorer, MockTree, StaticFolderSource};

    fn deps() -> (MockExplorer, MockTree, StaticFolderSource) {
        let host = MockExplorer::new();
        let tree = MockTree::with_collapsed_nodes(&["root", "root/mid", "root/mid/leaf"]);
        let source = StaticFolderSource::from_paths(&["root", "root/mid", "root/mid/leaf"]);
        (host, tree, source)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ancestor_chain_is_root_first() {
        let (host, tree, source) = deps();
        let sequencer = RevealSequencer::new(&host, &tree, &source);
        let chain = sequencer.ancestor_chain(&Folder::new("root/mid/leaf"));
        let paths: Vec<&str> = chain.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["root", "root/mid"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveals_ancestors_then_target() {
        let (host, tree, source) = deps();
        let sequencer = RevealSequencer::new(&host, &tree, &source);

        sequencer
            .reveal(&Folder::new("root/mid/leaf"), true)
            .await
            .unwrap();

        assert_eq!(
            host.revealed_paths(),
            vec!["root", "root/mid", "root/mid/leaf"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_panel_fails_fast() {
        let (host, tree, source) = deps();
        host.set_panel_missing(true);
        let sequencer = RevealSequencer::new(&host, &tree, &source);

        let err = sequencer
            .reveal(&Folder::new("root/mid/leaf"), true)
            .await
            .unwrap_err();

        assert!(err.is_fatal());
        // Nothing was revealed or expanded.
        assert!(host.calls().is_empty());
        assert!(tree.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_locate_gives_up_after_configured_attempts() {
        let (host, tree, source) = deps();
        tree.delay_node("root/mid/leaf", 10);
        let sequencer = RevealSequencer::new(&host, &tree, &source);

        let err = sequencer
            .reveal(&Folder::new("root/mid/leaf"), false)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            NavigatorError::NodeNotFound {
                path: "root/mid/leaf".to_string()
            }
        );
        // Ancestors were still expanded; no rollback.
        assert_eq!(tree.expanded_paths(), vec!["root", "root/mid"]);
    }
}
