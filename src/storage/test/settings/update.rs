use super::*;

/// Tests that update applies the mutation and persists immediately.
///
/// A fresh store loading the same file must see the mutated value.
///
/// Expected: change visible after reload
#[tokio::test]
async fn update_persists_immediately() {
    let dir = TempDir::new().unwrap();
    let mut store = SettingsStore::new(dir.path());
    store.load().await.unwrap();

    store
        .update(|settings| settings.language = "ru".to_string())
        .await
        .unwrap();

    let mut reloaded = SettingsStore::new(dir.path());
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.settings().language, "ru");
}

/// Tests replacing the target channel list.
///
/// Expected: new list persisted verbatim, order preserved
#[tokio::test]
async fn update_replaces_target_channels() {
    let dir = TempDir::new().unwrap();
    let mut store = SettingsStore::new(dir.path());
    store.load().await.unwrap();
    store
        .update(|settings| settings.target_channels = vec![333, 111, 222])
        .await
        .unwrap();

    let mut reloaded = SettingsStore::new(dir.path());
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.settings().target_channels, [333, 111, 222]);
}
