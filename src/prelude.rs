//! Prelude module for convenient imports.
//!
//! ```ignore
//! use folder_navigator::prelude::*;
//! ```

pub use crate::error::{NavResult, NavigatorError};
pub use crate::history::{FolderHistory, VisitRecord};
pub use crate::models::{Folder, PickerEntry, SectionKind};
pub use crate::navigator::{FolderNavigator, PickerSession};
pub use crate::ranking::RankLimits;
pub use crate::reveal::{RevealSequencer, RevealTiming};
pub use crate::settings::{DisplayMode, Settings};
pub use crate::traits::{
    Clock, ExplorerHost, FolderSource, FuzzyScorer, NodeId, NodeLocator, SettingsStore,
};
