//! Settings persistence capability.

use async_trait::async_trait;

use crate::error::NavResult;
use crate::settings::Settings;

/// Asynchronous load/save of the persisted settings record.
///
/// `load` merges whatever is on disk over [`Settings::default`]: missing
/// fields are filled in silently, a malformed record falls back to the
/// defaults rather than failing the caller.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the settings record, merged over defaults.
    async fn load(&self) -> NavResult<Settings>;

    /// Persist the full settings record.
    async fn save(&self, settings: &Settings) -> NavResult<()>;
}
