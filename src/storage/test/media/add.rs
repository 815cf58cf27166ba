use super::*;

/// Tests inserting a valid media link.
///
/// Verifies that the URL lands in the ordered sequence and gets a metadata
/// record carrying its type and caption.
///
/// Expected: true with link and metadata stored
#[test]
fn inserts_valid_link() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    let inserted = store.add("https://cdn.example.com/pic.png", MediaType::Image, "neat");

    assert!(inserted);
    assert_eq!(store.links(), ["https://cdn.example.com/pic.png"]);
    let link = store.get("https://cdn.example.com/pic.png").unwrap();
    assert_eq!(link.media_type, MediaType::Image);
    assert_eq!(link.generated_text, "neat");
}

/// Tests idempotence under repeated identical inserts.
///
/// The first insert succeeds, every repeat returns false and leaves the
/// store size unchanged.
///
/// Expected: true once, then false with size stable
#[test]
fn duplicate_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    assert!(store.add("https://cdn.example.com/pic.png", MediaType::Image, ""));
    assert!(!store.add("https://cdn.example.com/pic.png", MediaType::Image, ""));
    assert!(!store.add("https://cdn.example.com/pic.png", MediaType::Gif, "other"));

    assert_eq!(store.len(), 1);
}

/// Tests rejection of URLs shorter than the plausibility floor.
///
/// Expected: false with store unchanged
#[test]
fn short_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    assert!(!store.add("", MediaType::Image, ""));
    assert!(!store.add("http://a", MediaType::Image, ""));

    assert!(store.is_empty());
}

/// Tests rejection of non-http(s) schemes.
///
/// Expected: false with store unchanged
#[test]
fn non_http_scheme_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    assert!(!store.add("ftp://cdn.example.com/pic.png", MediaType::Image, ""));
    assert!(!store.add("cdn.example.com/a/pic.png", MediaType::Image, ""));

    assert!(store.is_empty());
}

/// Tests that blocked CDN links are always rejected, even on first sight.
///
/// Expected: false with store unchanged
#[test]
fn blocked_cdn_link_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    assert!(!store.add("https://media.tenor.com/abc123/def.gif", MediaType::Gif, ""));

    assert!(store.is_empty());
}

/// Tests that Tenor view-page links pass the blocklist.
///
/// Only the media sub-domain is blocked; view links embed fine.
///
/// Expected: true with link stored
#[test]
fn tenor_view_link_is_accepted() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    assert!(store.add("https://tenor.com/view/cat-dance-12345", MediaType::Gif, ""));
    assert_eq!(store.len(), 1);
}

/// Tests the blocked-domain predicate both commands share.
///
/// Expected: true only for media.tenor.com URLs
#[test]
fn blocked_predicate_matches_media_subdomain_only() {
    assert!(is_blocked_url("https://media.tenor.com/abc.gif"));
    assert!(!is_blocked_url("https://tenor.com/view/cat-dance-12345"));
    assert!(!is_blocked_url("https://cdn.example.com/pic.png"));
}
