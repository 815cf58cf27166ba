//! `/settings` - admin-only language configuration.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions, ResolvedValue,
};

use crate::bot::commands::{is_admin, respond_ephemeral};
use crate::error::AppError;
use crate::i18n;
use crate::state::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("settings")
        .description("Configure bot settings")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "language",
                "Choose language / Выберите язык",
            )
            .required(true)
            .add_string_choice("English", "en")
            .add_string_choice("Русский", "ru"),
        )
}

/// Sets the bot language from the enumerated choice and persists.
///
/// The confirmation is localized in the newly selected language.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let language = state.language().await;

    if !is_admin(command) {
        return respond_ephemeral(ctx, command, i18n::text(&language, "need_admin")).await;
    }

    let selected = command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == "language" => Some(value.to_string()),
            _ => None,
        })
        .ok_or_else(|| AppError::InternalError("Missing language option".to_string()))?;

    {
        let mut store = state.settings.write().await;
        store
            .update(|settings| settings.language = selected.clone())
            .await?;
    }

    tracing::info!("Language changed to: {}", selected);
    respond_ephemeral(ctx, command, i18n::text(&selected, "language_set")).await
}
