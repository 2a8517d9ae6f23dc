//! Mock tree view with an in-memory node table.
//!
//! Implements the full locate fallback order (path attribute, exact label,
//! partial path) over its node table, and can delay a node's first
//! successful lookup by a configurable number of attempts to imitate the
//! host UI lagging behind a reveal.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{NodeId, NodeLocator};

/// One recorded node-level action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    Expanded(String),
    Scrolled(String),
    HighlightOn(String),
    HighlightOff(String),
}

#[derive(Debug, Clone)]
struct MockNode {
    path: String,
    label: String,
    collapsed: bool,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: Vec<MockNode>,
    /// Remaining locate attempts that must fail per path, keyed by path.
    lag: HashMap<String, u32>,
    events: Vec<TreeEvent>,
}

/// A [`NodeLocator`] over an in-memory node table.
#[derive(Debug, Clone, Default)]
pub struct MockTree {
    inner: Arc<Mutex<Inner>>,
}

impl MockTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree whose nodes mirror `paths`, all initially collapsed.
    pub fn with_collapsed_nodes(paths: &[&str]) -> Self {
        let tree = Self::new();
        for path in paths {
            tree.add_node(path, true);
        }
        tree
    }

    /// Add a node; its label is the last path segment.
    pub fn add_node(&self, path: &str, collapsed: bool) {
        let label = path.rsplit('/').next().unwrap_or(path).to_string();
        self.inner.lock().unwrap().nodes.push(MockNode {
            path: path.to_string(),
            label,
            collapsed,
        });
    }

    /// Make the next `attempts` lookups for `path` come up empty, as if the
    /// host UI had not materialized the node yet.
    pub fn delay_node(&self, path: &str, attempts: u32) {
        self.inner.lock().unwrap().lag.insert(path.to_string(), attempts);
    }

    /// All recorded node actions, in order.
    pub fn events(&self) -> Vec<TreeEvent> {
        self.inner.lock().unwrap().events.clone()
    }

    /// Paths expanded so far, in order.
    pub fn expanded_paths(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                TreeEvent::Expanded(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Whether the node at `path` is currently collapsed.
    pub fn is_collapsed_path(&self, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .nodes
            .iter()
            .find(|n| n.path == path)
            .map(|n| n.collapsed)
            .unwrap_or(false)
    }

    fn path_of(&self, node: NodeId) -> String {
        self.inner.lock().unwrap().nodes[node.0 as usize].path.clone()
    }
}

impl NodeLocator for MockTree {
    fn locate(&self, path: &str, name: &str) -> Option<NodeId> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(remaining) = inner.lag.get_mut(path) {
            if *remaining > 0 {
                *remaining -= 1;
                return None;
            }
        }

        // Fallback order: path attribute, exact label, partial path.
        let by_attr = inner.nodes.iter().position(|n| n.path == path);
        let found = by_attr
            .or_else(|| inner.nodes.iter().position(|n| n.label == name))
            .or_else(|| inner.nodes.iter().position(|n| n.path.starts_with(path)));
        found.map(|ix| NodeId(ix as u64))
    }

    fn is_collapsed(&self, node: NodeId) -> bool {
        self.inner.lock().unwrap().nodes[node.0 as usize].collapsed
    }

    fn expand(&self, node: NodeId) {
        let path = self.path_of(node);
        let mut inner = self.inner.lock().unwrap();
        inner.nodes[node.0 as usize].collapsed = false;
        inner.events.push(TreeEvent::Expanded(path));
    }

    fn scroll_into_view(&self, node: NodeId) {
        let path = self.path_of(node);
        self.inner.lock().unwrap().events.push(TreeEvent::Scrolled(path));
    }

    fn set_highlighted(&self, node: NodeId, highlighted: bool) {
        let path = self.path_of(node);
        let event = if highlighted {
            TreeEvent::HighlightOn(path)
        } else {
            TreeEvent::HighlightOff(path)
        };
        self.inner.lock().unwrap().events.push(event);
    }
}
