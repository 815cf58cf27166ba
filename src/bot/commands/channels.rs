//! `/channels` - admin-only target channel configuration.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Permissions, ResolvedValue,
};

use crate::bot::commands::{is_admin, respond_ephemeral};
use crate::error::AppError;
use crate::i18n;
use crate::state::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("channels")
        .description("Set target channels for posting")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel1", "Target channel 1")
                .required(true)
                .channel_types(vec![ChannelType::Text]),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel2",
                "Target channel 2 (optional)",
            )
            .channel_types(vec![ChannelType::Text]),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel3",
                "Target channel 3 (optional)",
            )
            .channel_types(vec![ChannelType::Text]),
        )
}

/// Replaces the target channel list (1-3 channels) and persists.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let language = state.language().await;

    if !is_admin(command) {
        return respond_ephemeral(ctx, command, i18n::text(&language, "need_admin")).await;
    }

    let targets: Vec<u64> = command
        .data
        .options()
        .into_iter()
        .filter_map(|option| match option.value {
            ResolvedValue::Channel(channel) => Some(channel.id.get()),
            _ => None,
        })
        .collect();

    if targets.is_empty() {
        return respond_ephemeral(ctx, command, i18n::text(&language, "no_channels")).await;
    }

    {
        let mut store = state.settings.write().await;
        store
            .update(|settings| settings.target_channels = targets.clone())
            .await?;
    }

    let mentions = targets
        .iter()
        .map(|id| format!("<#{}>", id))
        .collect::<Vec<_>>()
        .join(", ");

    tracing::info!("Target channels updated: {:?}", targets);
    respond_ephemeral(
        ctx,
        command,
        i18n::text_with(&language, "channels_set", &[("channels", &mentions)]),
    )
    .await
}
