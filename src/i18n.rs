//! Localized message templates.
//!
//! Maps a locale to key → template pairs with a guaranteed fallback chain:
//! requested locale → base locale → the raw key itself. The locale is read
//! from the current settings value per call, so a language change applies to
//! the next message without any re-initialization.

/// Locale consulted when the requested one has no bundle or is missing a key.
const BASE_LOCALE: &str = "en";

static EN: &[(&str, &str)] = &[
    (
        "no_media",
        "No media stored yet. Use `/scan` to start collecting.",
    ),
    ("media_story", "📚 Media Story - {count} items found"),
    (
        "need_admin",
        "❌ You need administrator permissions to use this command.",
    ),
    (
        "no_media_random",
        "No media in storage. Use `/scan` to collect some!",
    ),
    ("cleaned", "🧹 Cleaned {count} media.tenor.com links from storage"),
    ("no_tenor", "No media.tenor.com links found in storage"),
    ("error", "Error: {error}"),
    ("language_set", "✅ Language set to English"),
    ("channels_set", "✅ Target channels updated: {channels}"),
    ("no_channels", "❌ You must select at least one channel"),
    (
        "scan_started",
        "🔍 Scan started! This may take a while. I'll send results here when done.",
    ),
    (
        "scan_already_running",
        "🔍 A scan is already running in this channel.",
    ),
    (
        "scan_finished",
        "✅ Scan finished! Found {count} new files in {time}ms",
    ),
];

static RU: &[(&str, &str)] = &[
    (
        "no_media",
        "Медиа не найдено. Используйте `/scan` чтобы начать сбор.",
    ),
    ("media_story", "📚 История медиа - {count} элементов найдено"),
    (
        "need_admin",
        "❌ Вам нужны права администратора для использования этой команды.",
    ),
    (
        "no_media_random",
        "Нет медиа в хранилище. Используйте `/scan` чтобы собрать медиа!",
    ),
    (
        "cleaned",
        "🧹 Удалено {count} ссылок media.tenor.com из хранилища",
    ),
    ("no_tenor", "Ссылки media.tenor.com не найдены в хранилище"),
    ("error", "Ошибка: {error}"),
    ("language_set", "✅ Язык установлен на Русский"),
    ("channels_set", "✅ Целевые каналы обновлены: {channels}"),
    ("no_channels", "❌ Вы должны выбрать хотя бы один канал"),
    (
        "scan_started",
        "🔍 Сканирование началось! Это может занять некоторое время. Я отправлю результаты сюда, когда закончу.",
    ),
    (
        "scan_already_running",
        "🔍 Сканирование этого канала уже выполняется.",
    ),
    (
        "scan_finished",
        "✅ Сканирование завершено! Найдено {count} новых файлов за {time}мс",
    ),
];

fn lookup(locale: &str, key: &str) -> Option<&'static str> {
    let table = match locale {
        "en" => EN,
        "ru" => RU,
        _ => return None,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolves a message template for the given locale and key.
///
/// Falls back to the base locale for unknown locales or missing keys, and to
/// the raw key itself when no bundle carries it.
pub fn text(locale: &str, key: &str) -> String {
    lookup(locale, key)
        .or_else(|| lookup(BASE_LOCALE, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Resolves a template and substitutes `{name}` placeholders.
pub fn text_with(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut message = text(locale, key);
    for (name, value) in args {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}
