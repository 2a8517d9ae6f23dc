//! Picker presentation items.
//!
//! The ranked folder list shown by the picker is a sequence of
//! [`PickerEntry`] values: real folders interleaved with non-selectable
//! section markers that label a promoted group ("Recently visited folders")
//! or the trailing unpromoted remainder ("All folders"). The list is a pure
//! projection rebuilt on every picker open; it is never persisted.

use serde::{Deserialize, Serialize};

use super::Folder;

/// Label kinds for section markers in the presentation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    RecentlyVisited,
    FrequentlyVisited,
    AllFolders,
}

impl SectionKind {
    /// Display label for the marker row.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::RecentlyVisited => "— Recently visited folders —",
            SectionKind::FrequentlyVisited => "— Frequently visited folders —",
            SectionKind::AllFolders => "— All folders —",
        }
    }
}

/// One row of the picker's presentation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEntry {
    /// A selectable folder.
    Folder(Folder),
    /// A non-selectable section marker. Choosing one is a no-op.
    Section(SectionKind),
}

impl PickerEntry {
    /// Text the fuzzy query layer matches against.
    ///
    /// Folders match on their full path; markers match on their label
    /// (inert in practice, since selecting a marker does nothing).
    pub fn match_text(&self) -> &str {
        match self {
            PickerEntry::Folder(folder) => &folder.path,
            PickerEntry::Section(kind) => kind.label(),
        }
    }

    /// Whether this entry is a section marker.
    pub fn is_section(&self) -> bool {
        matches!(self, PickerEntry::Section(_))
    }

    /// The folder, if this entry is one.
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            PickerEntry::Folder(folder) => Some(folder),
            PickerEntry::Section(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_labels() {
        assert_eq!(
            SectionKind::RecentlyVisited.label(),
            "— Recently visited folders —"
        );
        assert_eq!(SectionKind::AllFolders.label(), "— All folders —");
    }

    #[test]
    fn test_match_text_for_folder_is_path() {
        let entry = PickerEntry::Folder(Folder::new("a/b/c"));
        assert_eq!(entry.match_text(), "a/b/c");
        assert!(!entry.is_section());
    }

    #[test]
    fn test_match_text_for_marker_is_label() {
        let entry = PickerEntry::Section(SectionKind::FrequentlyVisited);
        assert_eq!(entry.match_text(), "— Frequently visited folders —");
        assert!(entry.is_section());
        assert!(entry.as_folder().is_none());
    }
}
