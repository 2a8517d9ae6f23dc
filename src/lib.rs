//! Folder Navigator - fuzzy folder picking and tree-reveal sequencing
//!
//! This library implements the host-agnostic core of a "jump to folder"
//! feature: an exclusion-filtered, policy-ranked, fuzzy-searchable folder
//! list, a per-folder visit history, and a timed reveal sequencer that
//! expands a folder's ancestor chain inside the host's tree view and
//! highlights the target. All host surfaces (folder enumeration, tree
//! panel, DOM node lookup, fuzzy scoring, settings persistence) are
//! consumed through the traits in [`traits`].

pub mod adapters;
pub mod error;
pub mod exclusion;
pub mod history;
pub mod models;
pub mod navigator;
pub mod prelude;
pub mod query;
pub mod ranking;
pub mod reveal;
pub mod settings;
pub mod traits;
