//! In-memory settings store for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{NavResult, NavigatorError};
use crate::settings::Settings;
use crate::traits::SettingsStore;

/// A [`SettingsStore`] holding the record in memory.
///
/// Tests can read back what was persisted with [`saved`](Self::saved), count
/// save calls, and make saves fail to exercise the storage error path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    settings: Option<Settings>,
    save_count: usize,
    save_should_fail: bool,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a settings record.
    pub fn with_settings(settings: Settings) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().settings = Some(settings);
        store
    }

    /// The most recently saved record, if any.
    pub fn saved(&self) -> Option<Settings> {
        self.inner.lock().unwrap().settings.clone()
    }

    /// Number of completed save calls.
    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap().save_count
    }

    /// Make subsequent saves fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        self.inner.lock().unwrap().save_should_fail = should_fail;
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> NavResult<Settings> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .settings
            .clone()
            .unwrap_or_default())
    }

    async fn save(&self, settings: &Settings) -> NavResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.save_should_fail {
            return Err(NavigatorError::Storage("save disabled by test".to_string()));
        }
        inner.settings = Some(settings.clone());
        inner.save_count += 1;
        Ok(())
    }
}
