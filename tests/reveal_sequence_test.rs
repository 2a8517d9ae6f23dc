//! Reveal sequencer ordering and resilience tests.
//!
//! All tests run under tokio's paused clock, so the settle delays elapse in
//! virtual time and the ordering contract is checked deterministically.

use folder_navigator::adapters::mock::{MockExplorer, MockTree, StaticFolderSource, TreeEvent};
use folder_navigator::models::Folder;
use folder_navigator::reveal::RevealSequencer;

const PATHS: [&str; 3] = ["root", "root/mid", "root/mid/leaf"];

fn deps() -> (MockExplorer, MockTree, StaticFolderSource) {
    (
        MockExplorer::new(),
        MockTree::with_collapsed_nodes(&PATHS),
        StaticFolderSource::from_paths(&PATHS),
    )
}

#[tokio::test(start_paused = true)]
async fn expansion_order_is_root_to_leaf_then_highlight() {
    let (host, tree, source) = deps();
    let sequencer = RevealSequencer::new(&host, &tree, &source);

    sequencer
        .reveal(&Folder::new("root/mid/leaf"), true)
        .await
        .unwrap();

    assert_eq!(
        tree.events(),
        vec![
            TreeEvent::Expanded("root".to_string()),
            TreeEvent::Expanded("root/mid".to_string()),
            TreeEvent::Expanded("root/mid/leaf".to_string()),
            TreeEvent::Scrolled("root/mid/leaf".to_string()),
            TreeEvent::HighlightOn("root/mid/leaf".to_string()),
            TreeEvent::HighlightOff("root/mid/leaf".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn order_holds_when_a_mid_lookup_lags() {
    let (host, tree, source) = deps();
    // The mid node only appears on the third locate attempt.
    tree.delay_node("root/mid", 2);
    let sequencer = RevealSequencer::new(&host, &tree, &source);

    sequencer
        .reveal(&Folder::new("root/mid/leaf"), true)
        .await
        .unwrap();

    // Despite the lag, mid is still expanded after root and before leaf.
    assert_eq!(tree.expanded_paths(), vec!["root", "root/mid", "root/mid/leaf"]);
}

#[tokio::test(start_paused = true)]
async fn lagging_ancestor_is_skipped_not_fatal() {
    let (host, tree, source) = deps();
    // Longer than the configured locate attempts: mid never appears in time.
    tree.delay_node("root/mid", 100);
    let sequencer = RevealSequencer::new(&host, &tree, &source);

    sequencer
        .reveal(&Folder::new("root/mid/leaf"), true)
        .await
        .unwrap();

    // mid's expand step was skipped, everything else still ran.
    assert_eq!(tree.expanded_paths(), vec!["root", "root/mid/leaf"]);
    assert!(tree
        .events()
        .contains(&TreeEvent::HighlightOn("root/mid/leaf".to_string())));
}

#[tokio::test(start_paused = true)]
async fn second_run_on_expanded_target_still_highlights() {
    let (host, tree, source) = deps();
    let target = Folder::new("root/mid/leaf");
    let sequencer = RevealSequencer::new(&host, &tree, &source);

    sequencer.reveal(&target, true).await.unwrap();
    let events_after_first = tree.events().len();

    sequencer.reveal(&target, true).await.unwrap();

    let second_run: Vec<TreeEvent> = tree.events().split_off(events_after_first);
    // Nothing left to expand, but the scroll and highlight still happen.
    assert_eq!(
        second_run,
        vec![
            TreeEvent::Scrolled("root/mid/leaf".to_string()),
            TreeEvent::HighlightOn("root/mid/leaf".to_string()),
            TreeEvent::HighlightOff("root/mid/leaf".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn expand_target_flag_off_reveals_without_expanding() {
    let (host, tree, source) = deps();
    let sequencer = RevealSequencer::new(&host, &tree, &source);

    sequencer
        .reveal(&Folder::new("root/mid/leaf"), false)
        .await
        .unwrap();

    // Ancestors expand, the target itself stays collapsed.
    assert_eq!(tree.expanded_paths(), vec!["root", "root/mid"]);
    assert!(tree.is_collapsed_path("root/mid/leaf"));
    // The target is still revealed and highlighted.
    assert_eq!(
        host.revealed_paths(),
        vec!["root", "root/mid", "root/mid/leaf"]
    );
    assert!(tree
        .events()
        .contains(&TreeEvent::HighlightOn("root/mid/leaf".to_string())));
}

#[tokio::test(start_paused = true)]
async fn reveal_primitive_vanishing_stops_the_sequence() {
    let (host, tree, source) = deps();
    host.set_reveal_unavailable(true);
    let sequencer = RevealSequencer::new(&host, &tree, &source);

    let err = sequencer
        .reveal(&Folder::new("root/mid/leaf"), true)
        .await
        .unwrap_err();

    assert!(err.is_fatal());
    assert!(tree.expanded_paths().is_empty());
}

#[tokio::test(start_paused = true)]
async fn top_level_target_has_no_ancestor_steps() {
    let (host, tree, source) = deps();
    let sequencer = RevealSequencer::new(&host, &tree, &source);

    sequencer.reveal(&Folder::new("root"), true).await.unwrap();

    assert_eq!(host.revealed_paths(), vec!["root"]);
    assert_eq!(tree.expanded_paths(), vec!["root"]);
}
