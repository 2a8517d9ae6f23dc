//! Folder enumeration capability.

use crate::models::Folder;

/// Read access to the host's current folder set.
pub trait FolderSource: Send + Sync {
    /// The full, current folder set in natural (alphabetical-by-path) order.
    fn all_folders(&self) -> Vec<Folder>;

    /// Look up one folder by its exact path.
    fn folder_by_path(&self, path: &str) -> Option<Folder>;
}
