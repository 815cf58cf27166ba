//! Channel history scanning for media links.
//!
//! A scan walks a channel's entire message history newest-to-oldest in
//! paginated batches, extracts candidate media links from attachments and
//! raw message text, and inserts each into the media store. The walk runs in
//! a spawned task so the invoking interaction can be acknowledged
//! immediately; results are reported back into the channel when it finishes.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock, Mutex};
use std::time::Instant;

use regex::Regex;
use serenity::all::{ChannelId, GetMessages, Message};
use serenity::http::Http;

use crate::error::AppError;
use crate::i18n;
use crate::model::media::MediaType;
use crate::state::{SharedMediaStore, SharedSettings};
use crate::storage::media::MediaStore;

/// Messages fetched per history request (Discord's page maximum).
const HISTORY_PAGE_SIZE: u8 = 100;

/// Matches Tenor view-page links, optionally with a two-letter locale segment.
static TENOR_VIEW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?tenor\.com/(?:[a-z]{2}/)?view/[^\s>]*")
        .expect("constant regex pattern is valid")
});

/// Matches bare URLs carrying an image or GIF file extension.
static IMAGE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://[^\s]*\.(?:gif|jpg|jpeg|png|webp)[^\s>]*")
        .expect("constant regex pattern is valid")
});

/// Classifies an attachment by its declared content type.
///
/// Returns `None` for anything that is not an image; `gif` content types map
/// to [`MediaType::Gif`], every other image type to [`MediaType::Image`].
pub fn classify_attachment(content_type: &str) -> Option<MediaType> {
    if !content_type.starts_with("image/") {
        return None;
    }
    if content_type.contains("gif") {
        Some(MediaType::Gif)
    } else {
        Some(MediaType::Image)
    }
}

/// Extracts candidate media links from raw message text.
///
/// Tenor view links are collected first and classified as GIFs. The generic
/// extension pattern then skips anything containing `tenor.com` (bare or the
/// media sub-domain) so a view link is never counted twice and blocked CDN
/// links never reach this path's classifier.
pub fn extract_from_text(content: &str) -> Vec<(String, MediaType)> {
    let mut found = Vec::new();

    for m in TENOR_VIEW_PATTERN.find_iter(content) {
        found.push((m.as_str().to_string(), MediaType::Gif));
    }

    for m in IMAGE_URL_PATTERN.find_iter(content) {
        let url = m.as_str();
        if url.contains("tenor.com") {
            continue;
        }
        let media_type = if url.to_ascii_lowercase().ends_with(".gif") {
            MediaType::Gif
        } else {
            MediaType::Image
        };
        found.push((url.to_string(), media_type));
    }

    found
}

/// Registry of in-flight scans, keyed by channel.
///
/// Starting a scan for a channel that already has an active entry is
/// rejected, so two walks never run over the same history concurrently.
#[derive(Clone, Default)]
pub struct ScanRegistry {
    active: Arc<Mutex<HashSet<ChannelId>>>,
}

impl ScanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a scan for the channel.
    ///
    /// Returns `None` when one is already running there. The returned guard
    /// deregisters the channel when dropped, so cleanup happens on success,
    /// error, and panic alike.
    pub fn begin(&self, channel_id: ChannelId) -> Option<ScanGuard> {
        let mut active = self.active.lock().expect("scan registry lock poisoned");
        if !active.insert(channel_id) {
            return None;
        }
        Some(ScanGuard {
            registry: self.clone(),
            channel_id,
        })
    }

    /// Whether a scan is currently running for the channel.
    pub fn is_active(&self, channel_id: ChannelId) -> bool {
        self.active
            .lock()
            .expect("scan registry lock poisoned")
            .contains(&channel_id)
    }

    fn finish(&self, channel_id: ChannelId) {
        self.active
            .lock()
            .expect("scan registry lock poisoned")
            .remove(&channel_id);
    }
}

/// Removes the registry entry for its channel on drop.
pub struct ScanGuard {
    registry: ScanRegistry,
    channel_id: ChannelId,
}

impl Drop for ScanGuard {
    fn drop(&mut self) {
        self.registry.finish(self.channel_id);
    }
}

/// One-shot worker that walks a channel's history into the media store.
pub struct ScanWorker {
    http: Arc<Http>,
    media: SharedMediaStore,
    settings: SharedSettings,
}

impl ScanWorker {
    pub fn new(http: Arc<Http>, media: SharedMediaStore, settings: SharedSettings) -> Self {
        Self {
            http,
            media,
            settings,
        }
    }

    /// Spawns the walk as an independent task and reports the outcome to the
    /// channel as an ordinary message.
    ///
    /// The guard rides inside the task so the registry entry survives exactly
    /// as long as the walk. Errors are logged and reported into the channel;
    /// nothing propagates out of the task.
    pub fn spawn(self, channel_id: ChannelId, guard: ScanGuard) {
        tokio::spawn(async move {
            let _guard = guard;

            let report = match self.run(channel_id).await {
                Ok((found, elapsed_ms)) => {
                    tracing::info!(
                        "Scan completed: found {} new files in {}ms",
                        found,
                        elapsed_ms
                    );
                    let language = self.settings.read().await.settings().language.clone();
                    i18n::text_with(
                        &language,
                        "scan_finished",
                        &[("count", &found.to_string()), ("time", &elapsed_ms.to_string())],
                    )
                }
                Err(err) => {
                    tracing::error!("Scan of channel {} failed: {}", channel_id, err);
                    let language = self.settings.read().await.settings().language.clone();
                    i18n::text_with(&language, "error", &[("error", &err.to_string())])
                }
            };

            if let Err(err) = channel_id.say(&self.http, report).await {
                tracing::error!(
                    "Failed to report scan outcome to channel {}: {}",
                    channel_id,
                    err
                );
            }
        });
    }

    /// Walks the channel's entire history and inserts every extracted link.
    ///
    /// # Returns
    /// - `Ok((found, elapsed_ms))` - Count of newly stored links and wall-clock time
    /// - `Err(AppError)` - History fetch or final persist failed
    pub async fn run(&self, channel_id: ChannelId) -> Result<(usize, u128), AppError> {
        let started = Instant::now();
        let mut found = 0usize;
        let mut before = None;

        loop {
            let mut request = GetMessages::new().limit(HISTORY_PAGE_SIZE);
            if let Some(id) = before {
                request = request.before(id);
            }

            let batch = channel_id.messages(&self.http, request).await?;
            let Some(last) = batch.last() else {
                break;
            };
            before = Some(last.id);

            {
                let mut store = self.media.lock().await;
                for message in &batch {
                    found += harvest_message(&mut store, message);
                }
            }

            if batch.len() < usize::from(HISTORY_PAGE_SIZE) {
                break;
            }
        }

        self.media.lock().await.persist().await?;

        Ok((found, started.elapsed().as_millis()))
    }
}

/// Feeds one message's attachments and text through extraction into the
/// store, returning how many links were newly inserted.
fn harvest_message(store: &mut MediaStore, message: &Message) -> usize {
    let mut found = 0;

    for attachment in &message.attachments {
        if let Some(content_type) = &attachment.content_type {
            if let Some(media_type) = classify_attachment(content_type) {
                if store.add(&attachment.url, media_type, "") {
                    found += 1;
                }
            }
        }
    }

    if !message.content.is_empty() {
        for (url, media_type) in extract_from_text(&message.content) {
            if store.add(&url, media_type, "") {
                found += 1;
            }
        }
    }

    found
}
