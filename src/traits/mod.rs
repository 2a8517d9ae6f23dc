//! Trait abstractions over the host application.
//!
//! The navigator never touches host internals directly: every surface it
//! consumes is a narrow capability trait, so production code supplies an
//! adapter and tests supply a fake.
//!
//! # Traits
//!
//! - [`FolderSource`] - folder enumeration and by-path lookup
//! - [`ExplorerHost`] - tree panel focus and reveal primitives
//! - [`NodeLocator`] - tree node lookup and node-level actions
//! - [`FuzzyScorer`] - fuzzy-match scoring primitive
//! - [`SettingsStore`] - persisted settings load/save
//! - [`Clock`] - current time, injectable for tests

pub mod clock;
pub mod explorer;
pub mod folders;
pub mod fuzzy;
pub mod locator;
pub mod settings_store;

pub use clock::Clock;
pub use explorer::ExplorerHost;
pub use folders::FolderSource;
pub use fuzzy::FuzzyScorer;
pub use locator::{NodeId, NodeLocator};
pub use settings_store::SettingsStore;
