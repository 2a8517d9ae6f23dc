//! Test doubles for the host capability traits.
//!
//! These fakes record every call so tests can assert on ordering and
//! side effects, and expose failure toggles for the error paths:
//!
//! - [`StaticFolderSource`] - fixed in-memory folder set
//! - [`MockExplorer`] - records focus/reveal calls, panel can go missing
//! - [`MockTree`] - in-memory node table with collapse state and
//!   configurable lookup lag
//! - [`SubstringScorer`] - deterministic substring "fuzzy" scorer
//! - [`InMemorySettingsStore`] - settings persistence without a filesystem
//! - [`FixedClock`] - manually advanced time source

pub mod clock;
pub mod explorer;
pub mod folders;
pub mod scorer;
pub mod settings;
pub mod tree;

pub use clock::FixedClock;
pub use explorer::{HostCall, MockExplorer};
pub use folders::StaticFolderSource;
pub use scorer::SubstringScorer;
pub use settings::InMemorySettingsStore;
pub use tree::{MockTree, TreeEvent};
