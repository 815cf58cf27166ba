//! `/random` - post one random stored media link with a caption.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponseFollowup,
};

use crate::bot::commands::{respond, respond_ephemeral};
use crate::error::AppError;
use crate::i18n;
use crate::state::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("random").description("Send a random media from storage")
}

/// Samples a fresh link and sends caption and URL as separate messages.
///
/// The URL goes in its own follow-up so Discord renders a plain preview
/// rather than a decorated embed.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let language = state.language().await;

    let url = {
        let mut store = state.media.lock().await;
        store.reload().await?;
        store.sample().map(str::to_string)
    };

    let Some(url) = url else {
        return respond_ephemeral(ctx, command, i18n::text(&language, "no_media_random")).await;
    };

    let caption = state.captions.generate().await;
    respond(ctx, command, caption).await?;

    let followup = CreateInteractionResponseFollowup::new().content(url.clone());
    command.create_followup(&ctx.http, followup).await?;

    tracing::info!("Sent random media: {}", url);
    Ok(())
}
