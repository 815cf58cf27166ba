//! `/story` - send the full stored URL list as a text file.

use serenity::all::{
    CommandInteraction, Context, CreateAttachment, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::bot::commands::respond_ephemeral;
use crate::error::AppError;
use crate::i18n;
use crate::state::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("story").description("Send a file with all stored media URLs")
}

/// Reloads the store and attaches every URL as a generated text file.
///
/// The listing is written to a temp file for the upload and removed after
/// sending. An empty store gets an ephemeral notice instead.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let language = state.language().await;

    let links = {
        let mut store = state.media.lock().await;
        store.reload().await?;
        store.links().to_vec()
    };

    if links.is_empty() {
        return respond_ephemeral(ctx, command, i18n::text(&language, "no_media")).await;
    }

    let path = std::env::temp_dir().join("media_story.txt");
    tokio::fs::write(&path, links.join("\n")).await?;
    let attachment = CreateAttachment::path(&path).await?;

    let text = i18n::text_with(&language, "media_story", &[("count", &links.len().to_string())]);
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(text)
            .add_file(attachment),
    );
    command.create_response(&ctx.http, response).await?;

    if let Err(err) = tokio::fs::remove_file(&path).await {
        tracing::warn!("Could not remove temp story file: {}", err);
    }

    tracing::info!("Sent media story with {} items", links.len());
    Ok(())
}
