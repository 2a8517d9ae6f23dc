//! Concrete implementations of the trait abstractions.
//!
//! Production adapters cover the surfaces this crate can own outright:
//! fuzzy scoring, settings persistence, and wall-clock time. The tree panel
//! and node lookup adapters live with the host integration, since only the
//! host knows its own UI structure.
//!
//! The [`mock`] submodule provides test doubles for every trait.

pub mod json_settings;
pub mod mock;
pub mod skim_fuzzy;
pub mod system_clock;

pub use json_settings::JsonSettingsStore;
pub use skim_fuzzy::SkimScorer;
pub use system_clock::SystemClock;
