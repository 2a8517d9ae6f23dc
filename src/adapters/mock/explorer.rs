//! Mock tree panel recording host calls.

use std::sync::{Arc, Mutex};

use crate::error::{NavResult, NavigatorError};
use crate::models::Folder;
use crate::traits::ExplorerHost;

/// One recorded host primitive invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    FocusPanel,
    Reveal(String),
}

/// An [`ExplorerHost`] that records every call.
///
/// Tests can remove the panel to exercise the fail-fast path, or make the
/// reveal primitive unavailable mid-sequence.
#[derive(Debug, Clone, Default)]
pub struct MockExplorer {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<HostCall>,
    panel_missing: bool,
    reveal_unavailable: bool,
}

impl MockExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in invocation order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Paths passed to `reveal`, in invocation order.
    pub fn revealed_paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Reveal(path) => Some(path),
                HostCall::FocusPanel => None,
            })
            .collect()
    }

    /// Simulate the host reporting zero tree panels.
    pub fn set_panel_missing(&self, missing: bool) {
        self.inner.lock().unwrap().panel_missing = missing;
    }

    /// Simulate a missing/renamed reveal primitive.
    pub fn set_reveal_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().reveal_unavailable = unavailable;
    }
}

impl ExplorerHost for MockExplorer {
    fn focus_panel(&self) -> NavResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.panel_missing {
            return Err(NavigatorError::HostUnavailable(
                "no tree panel open".to_string(),
            ));
        }
        inner.calls.push(HostCall::FocusPanel);
        Ok(())
    }

    fn reveal(&self, folder: &Folder) -> NavResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.reveal_unavailable {
            return Err(NavigatorError::HostUnavailable(
                "reveal primitive missing".to_string(),
            ));
        }
        inner.calls.push(HostCall::Reveal(folder.path.clone()));
        Ok(())
    }
}
