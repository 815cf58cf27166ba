//! Domain models for stored media links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a stored media link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Gif,
}

impl MediaType {
    /// Lowercase wire name, matching the metadata file format.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Gif => "gif",
        }
    }
}

/// A media link discovered in channel history.
///
/// Identity is the URL string itself (case-sensitive, exact match). Serialized
/// as one record of the `media` array in the metadata file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaLink {
    /// Absolute URL of the image or GIF.
    pub url: String,
    /// When the link was first inserted into the store.
    pub date_added: DateTime<Utc>,
    /// Whether the link points at a GIF or a still image.
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Caption recorded at insertion time, may be empty.
    #[serde(default)]
    pub generated_text: String,
}

impl MediaLink {
    /// Creates a link record stamped with the current time.
    pub fn new(url: &str, media_type: MediaType, generated_text: &str) -> Self {
        Self {
            url: url.to_string(),
            date_added: Utc::now(),
            media_type,
            generated_text: generated_text.to_string(),
        }
    }
}
