//! Runtime-configurable bot settings.

use serde::{Deserialize, Serialize};

/// Bot settings persisted to `settings.json`.
///
/// Loaded once at startup and mutated only through admin commands, which
/// persist immediately after each change. Unknown or missing fields fall back
/// to their defaults so an older settings file stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Two-letter language code selecting the localization bundle.
    pub language: String,
    /// Channel ids that receive automatic media posts.
    pub target_channels: Vec<u64>,
    /// Master switch for the posting scheduler.
    pub posting_enabled: bool,
    /// Chance in [0, 1] that a posting cycle actually posts.
    pub posting_probability: f64,
    /// Hours between posting cycles, applied at startup.
    pub posting_interval_hours: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            target_channels: Vec::new(),
            posting_enabled: true,
            posting_probability: 0.6,
            posting_interval_hours: 1,
        }
    }
}
