//! Folder value type.
//!
//! Folders are owned by the host's file tree; this core only reads them.
//! Identity is the full `/`-delimited, case-sensitive path. `parent` is the
//! parent folder's path (a back-reference, never an ownership edge), `None`
//! for top-level folders.

use serde::{Deserialize, Serialize};

/// A folder in the host's hierarchical file tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Full path, unique within the tree.
    pub path: String,
    /// Last path segment.
    pub name: String,
    /// Path of the parent folder, `None` at the top level.
    #[serde(default)]
    pub parent: Option<String>,
}

impl Folder {
    /// Build a folder from its path, deriving `name` and `parent`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let (parent, name) = match path.rsplit_once('/') {
            Some((parent, name)) => (Some(parent.to_string()), name.to_string()),
            None => (None, path.clone()),
        };
        Self { path, name, parent }
    }
}
