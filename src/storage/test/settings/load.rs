use super::*;

/// Tests loading when no settings file exists.
///
/// The defaults must be written back out so subsequent loads succeed.
///
/// Expected: Ok with defaults in memory and on disk
#[tokio::test]
async fn missing_file_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let mut store = SettingsStore::new(dir.path());

    store.load().await.unwrap();

    assert_eq!(*store.settings(), Settings::default());
    let raw = tokio::fs::read_to_string(dir.path().join(SETTINGS_FILE))
        .await
        .unwrap();
    let written: Settings = serde_json::from_str(&raw).unwrap();
    assert_eq!(written, Settings::default());
}

/// Tests loading a persisted settings file.
///
/// Expected: Ok with stored values, not defaults
#[tokio::test]
async fn loads_persisted_values() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(
        dir.path().join(SETTINGS_FILE),
        r#"{"language": "ru",
            "target_channels": [111, 222],
            "posting_enabled": false,
            "posting_probability": 0.25,
            "posting_interval_hours": 6}"#,
    )
    .await
    .unwrap();

    let mut store = SettingsStore::new(dir.path());
    store.load().await.unwrap();

    let settings = store.settings();
    assert_eq!(settings.language, "ru");
    assert_eq!(settings.target_channels, [111, 222]);
    assert!(!settings.posting_enabled);
    assert_eq!(settings.posting_probability, 0.25);
    assert_eq!(settings.posting_interval_hours, 6);
}

/// Tests loading a file with some fields absent.
///
/// Missing fields fall back to their defaults so older files stay readable.
///
/// Expected: Ok with present fields applied, rest defaulted
#[tokio::test]
async fn partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join(SETTINGS_FILE), r#"{"language": "ru"}"#)
        .await
        .unwrap();

    let mut store = SettingsStore::new(dir.path());
    store.load().await.unwrap();

    assert_eq!(store.settings().language, "ru");
    assert!(store.settings().posting_enabled);
    assert_eq!(store.settings().posting_probability, 0.6);
}

/// Tests loading a malformed settings file.
///
/// Parse failure is logged and the in-memory settings fall back to defaults
/// rather than failing startup.
///
/// Expected: Ok with defaults
#[tokio::test]
async fn malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join(SETTINGS_FILE), "not json at all")
        .await
        .unwrap();

    let mut store = SettingsStore::new(dir.path());
    store.load().await.unwrap();

    assert_eq!(*store.settings(), Settings::default());
}
