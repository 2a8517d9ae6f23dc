//! Error taxonomy.
//!
//! Only [`NavigatorError::HostUnavailable`] is fatal to an operation in
//! flight; everything else either degrades (a node that never appears) or
//! is a boundary rejection (invalid config, storage trouble).

use thiserror::Error;

/// Errors surfaced by the navigation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// The tree panel or a host primitive is missing entirely.
    #[error("host surface unavailable: {0}")]
    HostUnavailable(String),

    /// A folder's tree node never appeared despite retries.
    #[error("tree node not found for folder '{path}'")]
    NodeNotFound { path: String },

    /// A settings edit was rejected at the boundary.
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    /// The settings store failed to read or write.
    #[error("settings storage failed: {0}")]
    Storage(String),
}

impl NavigatorError {
    /// Whether the error aborts the whole operation rather than one step.
    pub fn is_fatal(&self) -> bool {
        matches!(self, NavigatorError::HostUnavailable(_))
    }
}

pub type NavResult<T> = Result<T, NavigatorError>;
