use tempfile::TempDir;

use crate::model::settings::Settings;
use crate::storage::settings::{SettingsStore, SETTINGS_FILE};

mod load;
mod update;
