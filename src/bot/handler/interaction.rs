//! Interaction routing and top-level command error reporting.

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::bot::commands;
use crate::i18n;
use crate::state::AppState;

/// Routes command interactions to their handlers.
///
/// Any error escaping a handler is logged and reported back to the invoking
/// user as an ephemeral message carrying the error text. If the handler
/// already sent the initial response, the report goes out as a follow-up
/// instead.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if let Err(err) = commands::dispatch(state, &ctx, &command).await {
        tracing::error!("Command /{} failed: {}", command.data.name, err);

        let language = state.language().await;
        let text = i18n::text_with(&language, "error", &[("error", &err.to_string())]);

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(text.clone())
                .ephemeral(true),
        );
        if command.create_response(&ctx.http, response).await.is_err() {
            // Initial response was already sent; report as a follow-up.
            let followup = CreateInteractionResponseFollowup::new()
                .content(text)
                .ephemeral(true);
            if let Err(send_err) = command.create_followup(&ctx.http, followup).await {
                tracing::error!("Failed to report command error: {}", send_err);
            }
        }
    }
}
