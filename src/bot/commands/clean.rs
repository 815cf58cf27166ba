//! `/clean` - purge blocked CDN links from storage.

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::bot::commands::{respond, respond_ephemeral};
use crate::error::AppError;
use crate::i18n;
use crate::state::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("clean").description("Remove all media.tenor.com links from storage")
}

/// Removes every blocked link and reports the count.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let language = state.language().await;

    let removed = state.media.lock().await.purge_blocked().await?;

    if removed > 0 {
        respond(
            ctx,
            command,
            i18n::text_with(&language, "cleaned", &[("count", &removed.to_string())]),
        )
        .await
    } else {
        respond_ephemeral(ctx, command, i18n::text(&language, "no_tenor")).await
    }
}
