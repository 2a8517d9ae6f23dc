//! Persisted navigator settings.
//!
//! The settings record is the only durable state the navigator owns. It is
//! stored by the host's settings collaborator as a single JSON document;
//! field names stay camelCase on the wire. Every field carries a default so
//! a partial or older record merges over [`Settings::default`] at load time
//! instead of being rejected.

use serde::{Deserialize, Serialize};

use crate::history::FolderHistory;
use crate::ranking::RankLimits;

/// Ordering policy for the picker's pre-query folder list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Natural (alphabetical-by-path) order, no promoted section.
    #[default]
    Default,
    /// Most-recently-visited folders promoted to the top.
    Recency,
    /// Most-frequently-visited folders promoted to the top.
    Frequency,
}

/// The full persisted settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Maximum number of picker rows returned for a query.
    pub max_results: usize,
    /// Expand the chosen folder itself after revealing it.
    pub expand_target_folder: bool,
    /// Verbose diagnostic logging (maps to `tracing` debug output).
    pub debug_mode: bool,
    /// Active ordering policy.
    pub folder_display_mode: DisplayMode,
    /// How many folders the Recency policy promotes.
    pub recent_folders_to_show: usize,
    /// How many folders the Frequency policy promotes.
    pub frequent_folders_to_show: usize,
    /// Visit statistics keyed by folder path.
    pub folder_history: FolderHistory,
    /// Excluded path prefixes; descendants are excluded by construction.
    pub excluded_folders: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_results: 10,
            expand_target_folder: true,
            debug_mode: false,
            folder_display_mode: DisplayMode::Default,
            recent_folders_to_show: 5,
            frequent_folders_to_show: 5,
            folder_history: FolderHistory::new(),
            excluded_folders: Vec::new(),
        }
    }
}

impl Settings {
    /// Promotion limits for the ranking engine.
    pub fn rank_limits(&self) -> RankLimits {
        RankLimits {
            recent: self.recent_folders_to_show,
            frequent: self.frequent_folders_to_show,
        }
    }
}
