use super::*;

/// Tests that purge removes exactly the blocked entries.
///
/// The blocked link is planted directly through reload (the add path would
/// reject it), mirroring a store populated before the blocklist existed.
///
/// Expected: removed count equals size delta, allowed links untouched
#[tokio::test]
async fn removes_only_blocked_links() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(
        dir.path().join("media_links.txt"),
        "https://cdn.example.com/pic.png\nhttps://media.tenor.com/abc.gif\nhttps://tenor.com/view/cat-12345\n",
    )
    .await
    .unwrap();

    let mut store = store_in(&dir);
    store.reload().await.unwrap();
    assert_eq!(store.len(), 3);

    let removed = store.purge_blocked().await.unwrap();

    assert_eq!(removed, 1);
    assert_eq!(
        store.links(),
        [
            "https://cdn.example.com/pic.png",
            "https://tenor.com/view/cat-12345"
        ]
    );
}

/// Tests purge on a store with nothing blocked.
///
/// Expected: zero removed, store unchanged
#[tokio::test]
async fn returns_zero_when_nothing_blocked() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.add("https://cdn.example.com/pic.png", MediaType::Image, "");

    let removed = store.purge_blocked().await.unwrap();

    assert_eq!(removed, 0);
    assert_eq!(store.len(), 1);
}

/// Tests that purge persists the shrunk store.
///
/// A reload after purging must not resurrect the removed links.
///
/// Expected: purged link absent after reload
#[tokio::test]
async fn persists_after_removal() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(
        dir.path().join("media_links.txt"),
        "https://cdn.example.com/pic.png\nhttps://media.tenor.com/abc.gif\n",
    )
    .await
    .unwrap();

    let mut store = store_in(&dir);
    store.reload().await.unwrap();
    let removed = store.purge_blocked().await.unwrap();
    assert_eq!(removed, 1);

    store.reload().await.unwrap();
    assert_eq!(store.links(), ["https://cdn.example.com/pic.png"]);
}

/// Tests that purge does not rewrite the files when nothing was removed.
///
/// Expected: link file still absent after a no-op purge
#[tokio::test]
async fn does_not_persist_when_nothing_removed() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    let removed = store.purge_blocked().await.unwrap();

    assert_eq!(removed, 0);
    assert!(!dir.path().join("media_links.txt").exists());
}
