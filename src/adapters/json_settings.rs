//! File-backed JSON settings store.
//!
//! Persists the settings record as pretty-printed JSON, by default in a
//! dotfile under the user's home directory. A missing file yields the
//! defaults; a malformed file is repaired by falling back to the defaults
//! (with a warning) rather than failing the load.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{NavResult, NavigatorError};
use crate::settings::Settings;
use crate::traits::SettingsStore;

/// Default settings file name under the home directory.
const SETTINGS_FILE: &str = ".folder_navigator.json";

/// [`SettingsStore`] writing the record to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `~/.folder_navigator.json`.
    pub fn in_home_dir() -> NavResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| NavigatorError::Storage("no home directory".to_string()))?;
        Ok(Self::new(home.join(SETTINGS_FILE)))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> NavResult<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| NavigatorError::Storage(format!("read {:?}: {}", self.path, e)))?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "malformed settings record, using defaults");
                Ok(Settings::default())
            }
        }
    }

    async fn save(&self, settings: &Settings) -> NavResult<()> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| NavigatorError::Storage(format!("serialize settings: {}", e)))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| NavigatorError::Storage(format!("write {:?}: {}", self.path, e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DisplayMode;

    #[tokio::test]
    async fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("settings.json"));
        let settings = store.load().await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("settings.json"));

        let mut settings = Settings::default();
        settings.folder_display_mode = DisplayMode::Frequency;
        settings.excluded_folders.push("archive".to_string());
        store.save(&settings).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonSettingsStore::new(&path);
        let settings = store.load().await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"maxResults": 42}"#).unwrap();

        let store = JsonSettingsStore::new(&path);
        let settings = store.load().await.unwrap();
        assert_eq!(settings.max_results, 42);
        assert!(settings.expand_target_folder);
    }
}
