//! Recurring media posting scheduler.

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::service::posting::MediaPostingService;

/// Starts the media posting scheduler.
///
/// Fires at the top of every `interval_hours` hours; the jitter and the
/// probability gate inside the cycle decide whether a firing actually posts.
/// The interval is read from settings once at startup, so changing it takes
/// effect on the next restart.
///
/// # Arguments
/// - `service`: Posting service cloned into each firing
/// - `interval_hours`: Hours between firings (clamped to at least 1)
pub async fn start_scheduler(
    service: MediaPostingService,
    interval_hours: u64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cron = posting_cron(interval_hours);

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let service = service.clone();

        Box::pin(async move {
            if let Err(e) = service.run_cycle().await {
                tracing::error!("Error in media posting cycle: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Media posting scheduler started ({})", cron);

    Ok(())
}

/// Six-field cron expression firing at the top of every N hours.
fn posting_cron(interval_hours: u64) -> String {
    format!("0 0 */{} * * *", interval_hours.max(1))
}
