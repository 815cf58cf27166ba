//! Settings persistence backed by a single JSON file.
//!
//! The store wraps the [`Settings`] model with its file path. Loading a
//! missing file writes the defaults back out so subsequent loads succeed;
//! a malformed file is logged and replaced by defaults in memory. Admin
//! commands mutate through [`SettingsStore::update`], which persists
//! immediately.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::model::settings::Settings;

/// File name of the persisted settings.
pub const SETTINGS_FILE: &str = "settings.json";

pub struct SettingsStore {
    settings: Settings,
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store with default settings rooted in the data directory.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            settings: Settings::default(),
            path: data_dir.join(SETTINGS_FILE),
        }
    }

    /// Loads settings from disk.
    ///
    /// A missing file triggers a default-write; a file that fails to parse is
    /// logged and the in-memory settings fall back to defaults.
    ///
    /// # Returns
    /// - `Ok(())` - Settings loaded (or defaults written)
    /// - `Err(AppError)` - The file could not be read, or the default-write failed
    pub async fn load(&mut self) -> Result<(), AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str::<Settings>(&raw) {
                Ok(settings) => self.settings = settings,
                Err(err) => {
                    tracing::error!("Invalid JSON in {}: {}", self.path.display(), err);
                    self.settings = Settings::default();
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.settings = Settings::default();
                self.persist().await?;
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!("Settings loaded");
        Ok(())
    }

    /// Writes the current settings out as pretty-printed JSON.
    pub async fn persist(&self) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&self.settings)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!("Settings saved");
        Ok(())
    }

    /// Applies a mutation and persists the result immediately.
    pub async fn update(&mut self, apply: impl FnOnce(&mut Settings)) -> Result<(), AppError> {
        apply(&mut self.settings);
        self.persist().await
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
