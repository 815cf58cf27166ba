//! Slash command registration and dispatch.
//!
//! Each command module exposes a `register()` builder and a `run()` handler.
//! Admin-gated commands declare `default_member_permissions` so Discord hides
//! them from regular members, and additionally re-check at runtime since
//! server owners can override command permissions.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::error::AppError;
use crate::state::AppState;

pub mod channels;
pub mod clean;
pub mod random;
pub mod scan;
pub mod settings;
pub mod story;

/// All slash commands registered on startup.
pub fn registrations() -> Vec<CreateCommand> {
    vec![
        story::register(),
        scan::register(),
        random::register(),
        clean::register(),
        settings::register(),
        channels::register(),
    ]
}

/// Routes a command interaction to its handler.
pub async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        "story" => story::run(state, ctx, command).await,
        "scan" => scan::run(state, ctx, command).await,
        "random" => random::run(state, ctx, command).await,
        "clean" => clean::run(state, ctx, command).await,
        "settings" => settings::run(state, ctx, command).await,
        "channels" => channels::run(state, ctx, command).await,
        other => {
            tracing::warn!("Unknown command: /{}", other);
            Ok(())
        }
    }
}

/// True when the invoking member has administrator permissions.
pub fn is_admin(command: &CommandInteraction) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator())
}

/// Sends a plain text initial response.
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    text: String,
) -> Result<(), AppError> {
    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(text));
    command.create_response(&ctx.http, response).await?;
    Ok(())
}

/// Sends an ephemeral text initial response, visible only to the invoker.
pub async fn respond_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    text: String,
) -> Result<(), AppError> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(text)
            .ephemeral(true),
    );
    command.create_response(&ctx.http, response).await?;
    Ok(())
}
