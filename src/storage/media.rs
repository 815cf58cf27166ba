//! Media link store backed by two flat files.
//!
//! The store owns an ordered URL sequence (insertion order, used for
//! deterministic file output) and a URL → metadata map, loaded from a
//! newline-delimited link file and a JSON metadata file. Both files are
//! rewritten wholesale after any mutation batch; loading replaces the
//! in-memory state entirely rather than merging.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::media::{MediaLink, MediaType};

/// File name of the newline-delimited URL list.
pub const MEDIA_LINKS_FILE: &str = "media_links.txt";
/// File name of the JSON metadata file.
pub const MEDIA_METADATA_FILE: &str = "media_metadata.json";

/// Substring identifying direct Tenor CDN links.
const BLOCKED_DOMAIN: &str = "media.tenor.com";
/// Anything shorter than this cannot be a usable absolute URL.
const MIN_URL_LEN: usize = 10;

/// Returns true for URLs under the blocked CDN pattern.
///
/// Direct `media.tenor.com` links degrade Discord's inline preview, while
/// `tenor.com/view/` page links embed fine and stay allowed. Both `add` and
/// `purge_blocked` share this predicate.
pub fn is_blocked_url(url: &str) -> bool {
    url.contains(BLOCKED_DOMAIN)
}

/// Serialized form of the metadata file: `{"media": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct MetadataFile {
    #[serde(default)]
    media: Vec<MediaLink>,
}

/// Store of deduplicated media links and their metadata.
///
/// Constructed once at startup and shared behind a lock; every caller that
/// wants freshness reloads from disk before reading.
pub struct MediaStore {
    links: Vec<String>,
    metadata: HashMap<String, MediaLink>,
    links_path: PathBuf,
    metadata_path: PathBuf,
}

impl MediaStore {
    /// Creates an empty store rooted in the given data directory.
    ///
    /// No I/O happens here; call [`MediaStore::reload`] to populate it.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            links: Vec::new(),
            metadata: HashMap::new(),
            links_path: data_dir.join(MEDIA_LINKS_FILE),
            metadata_path: data_dir.join(MEDIA_METADATA_FILE),
        }
    }

    /// Replaces the in-memory state with whatever the two files contain.
    ///
    /// Missing files load as empty. A metadata file that fails to parse is
    /// logged and treated as empty rather than failing the caller. No
    /// reconciliation pass runs between the two files; each side reflects its
    /// own file verbatim.
    ///
    /// # Returns
    /// - `Ok(())` - State replaced from disk
    /// - `Err(AppError::IoErr)` - A file exists but could not be read
    pub async fn reload(&mut self) -> Result<(), AppError> {
        self.links = match tokio::fs::read_to_string(&self.links_path).await {
            Ok(raw) => raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        self.metadata = match tokio::fs::read_to_string(&self.metadata_path).await {
            Ok(raw) => match serde_json::from_str::<MetadataFile>(&raw) {
                Ok(file) => file
                    .media
                    .into_iter()
                    .map(|link| (link.url.clone(), link))
                    .collect(),
                Err(err) => {
                    tracing::error!(
                        "Invalid JSON in {}: {}",
                        self.metadata_path.display(),
                        err
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Loaded {} media links from storage", self.links.len());
        Ok(())
    }

    /// Writes both files: one URL per line, and the metadata records as a
    /// pretty-printed `{"media": [...]}` array in link order.
    ///
    /// Whole-file rewrite; a crash mid-write is an accepted data-loss risk at
    /// this scale.
    pub async fn persist(&self) -> Result<(), AppError> {
        let mut lines = self.links.join("\n");
        if !lines.is_empty() {
            lines.push('\n');
        }
        tokio::fs::write(&self.links_path, lines).await?;

        let file = MetadataFile {
            media: self
                .links
                .iter()
                .filter_map(|url| self.metadata.get(url).cloned())
                .collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        tokio::fs::write(&self.metadata_path, json).await?;

        tracing::debug!("Persisted {} media links", self.links.len());
        Ok(())
    }

    /// Inserts a new media link, returning whether it was stored.
    ///
    /// Rejects without side effects when the URL is too short to be real, is
    /// not absolute http(s), matches the blocked CDN pattern, or is already
    /// present. Duplicates and invalid candidates are indistinguishable in
    /// the return value, matching the scan worker's "found" accounting.
    pub fn add(&mut self, url: &str, media_type: MediaType, generated_text: &str) -> bool {
        if url.len() < MIN_URL_LEN {
            return false;
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            tracing::warn!("Invalid URL format: {}", url);
            return false;
        }
        if is_blocked_url(url) {
            tracing::debug!("Skipped blocked CDN link: {}", url);
            return false;
        }
        if self.metadata.contains_key(url) {
            tracing::debug!("Media already exists: {}", url);
            return false;
        }

        self.links.push(url.to_string());
        self.metadata
            .insert(url.to_string(), MediaLink::new(url, media_type, generated_text));

        tracing::info!("Added new media: {} ({})", url, media_type.as_str());
        true
    }

    /// Removes every link matching the blocked CDN predicate.
    ///
    /// Removal covers both the ordered sequence and the metadata map.
    /// Persists only when something was actually removed.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of links removed
    /// - `Err(AppError)` - Persisting the shrunk store failed
    pub async fn purge_blocked(&mut self) -> Result<usize, AppError> {
        let before = self.links.len();
        self.links.retain(|url| !is_blocked_url(url));
        self.metadata.retain(|url, _| !is_blocked_url(url));

        let removed = before - self.links.len();
        if removed > 0 {
            self.persist().await?;
            tracing::info!("Purged {} blocked links from storage", removed);
        }
        Ok(removed)
    }

    /// Returns a uniformly random URL, or `None` when the store is empty.
    pub fn sample(&self) -> Option<&str> {
        self.links.choose(&mut rand::rng()).map(String::as_str)
    }

    /// Ordered URL sequence, insertion order.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Metadata recorded for a URL, if present.
    pub fn get(&self, url: &str) -> Option<&MediaLink> {
        self.metadata.get(url)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
