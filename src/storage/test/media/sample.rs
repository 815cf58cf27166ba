use super::*;

/// Tests sampling from an empty store.
///
/// Expected: None
#[test]
fn empty_store_yields_none() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.sample().is_none());
}

/// Tests that a sample is always a member of the stored sequence.
///
/// Repeated draws never fabricate a URL outside the store.
///
/// Expected: every draw present in the sequence
#[test]
fn sample_is_member_of_sequence() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.add("https://cdn.example.com/one.png", MediaType::Image, "");
    store.add("https://cdn.example.com/two.gif", MediaType::Gif, "");
    store.add("https://cdn.example.com/three.jpg", MediaType::Image, "");

    for _ in 0..50 {
        let url = store.sample().unwrap();
        assert!(store.links().contains(&url.to_string()));
    }
}

/// Tests sampling from a single-entry store.
///
/// Expected: always the one stored URL
#[test]
fn single_entry_store_yields_that_entry() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.add("https://cdn.example.com/only.png", MediaType::Image, "");

    assert_eq!(store.sample(), Some("https://cdn.example.com/only.png"));
}
