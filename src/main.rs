mod bot;
mod config;
mod error;
mod i18n;
mod model;
mod scheduler;
mod service;
mod state;
mod storage;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::service::posting::MediaPostingService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);

    // Load persisted data before the client connects; either file being
    // unreadable leaves the corresponding store at its defaults.
    if let Err(e) = state.media.lock().await.reload().await {
        tracing::error!("Failed to load media data: {}", e);
    }
    if let Err(e) = state.settings.write().await.load().await {
        tracing::error!("Failed to load settings: {}", e);
    }

    let client = bot::start::init_bot(&config, state.clone()).await?;
    let discord_http = client.http.clone();

    // Start the posting scheduler alongside the gateway client
    let posting = MediaPostingService::new(
        discord_http,
        state.media.clone(),
        state.settings.clone(),
        state.captions.clone(),
    );
    let interval_hours = state.settings.read().await.settings().posting_interval_hours;
    tokio::spawn(async move {
        if let Err(e) = scheduler::media_posting::start_scheduler(posting, interval_hours).await {
            tracing::error!("Media posting scheduler error: {}", e);
        }
    });

    bot::start::start_bot(client).await
}
