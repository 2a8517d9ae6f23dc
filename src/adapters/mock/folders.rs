//! Fixed in-memory folder source.

use crate::models::Folder;
use crate::traits::FolderSource;

/// A [`FolderSource`] over a fixed folder set.
///
/// Paths are kept in the order given; pass them pre-sorted when a test
/// depends on natural order.
#[derive(Debug, Clone, Default)]
pub struct StaticFolderSource {
    folders: Vec<Folder>,
}

impl StaticFolderSource {
    /// Build a source from folder paths, deriving name and parent.
    pub fn from_paths(paths: &[&str]) -> Self {
        Self {
            folders: paths.iter().copied().map(Folder::new).collect(),
        }
    }

    /// Build a source from fully specified folders.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }
}

impl FolderSource for StaticFolderSource {
    fn all_folders(&self) -> Vec<Folder> {
        self.folders.clone()
    }

    fn folder_by_path(&self, path: &str) -> Option<Folder> {
        self.folders.iter().find(|f| f.path == path).cloned()
    }
}
