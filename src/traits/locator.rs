//! Tree node lookup and node-level actions.
//!
//! The host tree updates its node structure asynchronously, so a lookup may
//! legitimately come up empty right after a reveal. The sequencer treats
//! `None` as "not there yet" and polls.

/// Opaque handle to one node in the host's tree structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Locate and manipulate nodes in the host's tree view.
///
/// `locate` implementations must try lookups in this order:
/// 1. exact match on the node's stable path identity attribute,
/// 2. exact match on the node's label text,
/// 3. partial/prefix path match,
/// 4. not found (`None`).
pub trait NodeLocator: Send + Sync {
    /// Find the node for a folder, given its path and display name.
    fn locate(&self, path: &str, name: &str) -> Option<NodeId>;

    /// Whether the node's children are currently hidden.
    fn is_collapsed(&self, node: NodeId) -> bool;

    /// Expand the node so its children become visible.
    fn expand(&self, node: NodeId);

    /// Scroll the node into centered view.
    fn scroll_into_view(&self, node: NodeId);

    /// Apply or remove the highlight marker on the node.
    fn set_highlighted(&self, node: NodeId, highlighted: bool);
}
