//! `/scan` - walk the invoking channel's history for media links.

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::bot::commands::{respond, respond_ephemeral};
use crate::error::AppError;
use crate::i18n;
use crate::service::scan::ScanWorker;
use crate::state::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("scan").description("Scan channel history for images and GIFs")
}

/// Acknowledges immediately and runs the walk as an independent task.
///
/// The scan result lands in the channel as an ordinary message once the walk
/// finishes. A channel with a scan already in flight gets an ephemeral
/// rejection instead of a second walk.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let language = state.language().await;
    let channel_id = command.channel_id;

    let Some(guard) = state.scans.begin(channel_id) else {
        return respond_ephemeral(ctx, command, i18n::text(&language, "scan_already_running"))
            .await;
    };

    respond(ctx, command, i18n::text(&language, "scan_started")).await?;

    let worker = ScanWorker::new(ctx.http.clone(), state.media.clone(), state.settings.clone());
    worker.spawn(channel_id, guard);

    tracing::info!("Scan task started for channel {}", channel_id);
    Ok(())
}
