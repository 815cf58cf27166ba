//! Caption generation from the word-bank file.
//!
//! Captions are assembled from a JSON word bank: one random template
//! interpolated with one random greeting and one random descriptive word.
//! The bank is re-read on every generation so edits apply without a restart.
//! Generation never fails; any missing, malformed, or empty input degrades
//! to a fixed default caption.

use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use serde::Deserialize;

/// File name of the caption word bank.
pub const WORD_BASE_FILE: &str = "word_base.json";

/// Caption used whenever the word bank cannot produce one.
const DEFAULT_CAPTION: &str = "Check out this awesome content!";

/// Deserialized word bank. Missing keys become empty pools.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WordBank {
    templates: Vec<String>,
    greetings: Vec<String>,
    descriptive_words: Vec<String>,
}

impl WordBank {
    /// Picks one entry from each pool and interpolates the template.
    ///
    /// Returns `None` when any pool is empty.
    fn generate(&self) -> Option<String> {
        let mut rng = rand::rng();
        let template = self.templates.choose(&mut rng)?;
        let greeting = self.greetings.choose(&mut rng)?;
        let adjective = self.descriptive_words.choose(&mut rng)?;

        Some(
            template
                .replace("{greeting}", greeting)
                .replace("{adjective}", adjective),
        )
    }
}

/// Service producing captions for posted media.
#[derive(Clone)]
pub struct CaptionService {
    word_base_path: PathBuf,
}

impl CaptionService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            word_base_path: data_dir.join(WORD_BASE_FILE),
        }
    }

    /// Generates a caption, falling back to the default on any failure.
    pub async fn generate(&self) -> String {
        let bank = match tokio::fs::read_to_string(&self.word_base_path).await {
            Ok(raw) => match serde_json::from_str::<WordBank>(&raw) {
                Ok(bank) => bank,
                Err(err) => {
                    tracing::error!(
                        "Invalid JSON in {}: {}",
                        self.word_base_path.display(),
                        err
                    );
                    return DEFAULT_CAPTION.to_string();
                }
            },
            Err(err) => {
                tracing::error!(
                    "Could not read {}: {}",
                    self.word_base_path.display(),
                    err
                );
                return DEFAULT_CAPTION.to_string();
            }
        };

        bank.generate().unwrap_or_else(|| DEFAULT_CAPTION.to_string())
    }
}
