//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Used to log connection
//! information and register the global slash command set.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("for fresh media")));

    match Command::set_global_commands(&ctx.http, commands::registrations()).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
