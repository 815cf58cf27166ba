use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub discord_bot_token: String,

    /// Directory holding the flat-file store, settings, and word bank.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            data_dir: std::env::var("MEDLEY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }
}
