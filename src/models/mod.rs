//! Data models shared across the navigator.

pub mod folder;
pub mod picker;

pub use folder::Folder;
pub use picker::{PickerEntry, SectionKind};
