//! Scheduled media posting cycle.
//!
//! Each cycle applies a random jitter sleep, rolls a probability gate,
//! samples one link from a freshly reloaded store, and delivers it to every
//! configured target channel. Per-channel failures are isolated; one broken
//! channel never stops delivery to the rest.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serenity::all::ChannelId;
use serenity::http::Http;

use crate::error::AppError;
use crate::service::caption::CaptionService;
use crate::state::{SharedMediaStore, SharedSettings};

/// Jitter magnitude around each cycle, in seconds (±10 minutes).
const JITTER_RANGE_SECS: i64 = 600;

/// Probability gate for a posting cycle.
///
/// Kept as a pure function of the drawn roll so the boundary is testable
/// without touching the RNG.
pub fn passes_gate(roll: f64, probability: f64) -> bool {
    roll < probability
}

/// Converts a signed jitter offset into a sleep duration.
///
/// The cron tick is the baseline, so a non-positive draw means "post at the
/// tick" rather than travelling back in time.
pub fn jitter_delay(offset_secs: i64) -> Duration {
    if offset_secs > 0 {
        Duration::from_secs(offset_secs as u64)
    } else {
        Duration::ZERO
    }
}

/// Service executing one posting cycle per scheduler firing.
#[derive(Clone)]
pub struct MediaPostingService {
    http: Arc<Http>,
    media: SharedMediaStore,
    settings: SharedSettings,
    captions: CaptionService,
}

impl MediaPostingService {
    pub fn new(
        http: Arc<Http>,
        media: SharedMediaStore,
        settings: SharedSettings,
        captions: CaptionService,
    ) -> Self {
        Self {
            http,
            media,
            settings,
            captions,
        }
    }

    /// Runs one posting cycle.
    ///
    /// Aborts silently (log only) when posting is disabled, the probability
    /// roll fails, the store is empty, or no target channels are configured.
    ///
    /// # Returns
    /// - `Ok(())` - Cycle completed (possibly without posting)
    /// - `Err(AppError)` - Reloading the media store failed
    pub async fn run_cycle(&self) -> Result<(), AppError> {
        let settings = self.settings.read().await.settings().clone();

        if !settings.posting_enabled {
            tracing::info!("Media posting disabled");
            return Ok(());
        }

        let offset = rand::rng().random_range(-JITTER_RANGE_SECS..=JITTER_RANGE_SECS);
        tokio::time::sleep(jitter_delay(offset)).await;

        let roll: f64 = rand::rng().random();
        if !passes_gate(roll, settings.posting_probability) {
            tracing::info!("Media posting skipped (probability check failed)");
            return Ok(());
        }

        let url = {
            let mut store = self.media.lock().await;
            store.reload().await?;
            store.sample().map(str::to_string)
        };
        let Some(url) = url else {
            tracing::warn!("No media available for posting");
            return Ok(());
        };

        if settings.target_channels.is_empty() {
            tracing::warn!("No target channels configured");
            return Ok(());
        }

        for channel_id in settings.target_channels.iter().copied().map(ChannelId::new) {
            // A deleted channel or one the bot cannot see fails here; skip it
            // and keep delivering to the rest.
            if let Err(err) = self.http.get_channel(channel_id).await {
                tracing::error!(
                    "Target channel {} not found or inaccessible: {}",
                    channel_id,
                    err
                );
                continue;
            }

            let caption = self.captions.generate().await;
            if let Err(err) = channel_id.say(&self.http, caption).await {
                tracing::error!("Error posting to channel {}: {}", channel_id, err);
                continue;
            }

            // The bare URL goes in its own message so Discord renders a plain
            // preview instead of a decorated embed.
            match channel_id.say(&self.http, url.clone()).await {
                Ok(_) => tracing::info!("Posted media to channel {}", channel_id),
                Err(err) => {
                    tracing::error!("Error posting to channel {}: {}", channel_id, err)
                }
            }
        }

        Ok(())
    }
}
