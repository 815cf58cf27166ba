//! Application state shared across commands and background tasks.
//!
//! This module defines the `AppState` struct holding every shared resource:
//! the media store, the settings store, the scan registry, and the caption
//! service. The state is initialized once during startup and cloned (cheaply,
//! everything inside is reference-counted) into the event handler, the scan
//! worker, and the posting scheduler.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::service::caption::CaptionService;
use crate::service::scan::ScanRegistry;
use crate::storage::media::MediaStore;
use crate::storage::settings::SettingsStore;

/// Media store behind an exclusive lock.
///
/// Every read-modify-persist sequence holds the lock for its whole duration,
/// so a posting cycle can never observe a half-applied scan batch.
pub type SharedMediaStore = Arc<Mutex<MediaStore>>;

/// Settings store behind a reader-writer lock.
pub type SharedSettings = Arc<RwLock<SettingsStore>>;

/// Shared resources for command handlers and background tasks.
#[derive(Clone)]
pub struct AppState {
    /// Deduplicated media links and their metadata.
    pub media: SharedMediaStore,
    /// Persisted runtime configuration.
    pub settings: SharedSettings,
    /// In-flight scans, keyed by channel.
    pub scans: ScanRegistry,
    /// Caption generator for posted media.
    pub captions: CaptionService,
}

impl AppState {
    /// Creates the state with empty stores rooted in the configured data
    /// directory. Callers load persisted data before the client connects.
    pub fn new(config: &Config) -> Self {
        Self {
            media: Arc::new(Mutex::new(MediaStore::new(&config.data_dir))),
            settings: Arc::new(RwLock::new(SettingsStore::new(&config.data_dir))),
            scans: ScanRegistry::new(),
            captions: CaptionService::new(&config.data_dir),
        }
    }

    /// Currently configured language code.
    pub async fn language(&self) -> String {
        self.settings.read().await.settings().language.clone()
    }
}
