//! Tree panel capability.

use crate::error::NavResult;
use crate::models::Folder;

/// The host's tree-view panel surface.
///
/// Both methods are best-effort host primitives. A missing panel or a
/// missing/renamed host API is reported as
/// [`NavigatorError::HostUnavailable`](crate::error::NavigatorError::HostUnavailable),
/// never a panic. When several panels of the same type are open, adapters
/// target the first one found.
pub trait ExplorerHost: Send + Sync {
    /// Surface and focus the tree-view panel.
    fn focus_panel(&self) -> NavResult<()>;

    /// Ask the tree view to scroll to / register `folder` as visible.
    ///
    /// Depending on host version this may or may not expand ancestors,
    /// which is why the sequencer follows up with node-level expansion.
    fn reveal(&self, folder: &Folder) -> NavResult<()>;
}
