use tempfile::TempDir;

use crate::model::media::MediaType;
use crate::storage::media::{is_blocked_url, MediaStore};

mod add;
mod purge;
mod sample;

/// Creates an empty store rooted in a fresh temp directory.
fn store_in(dir: &TempDir) -> MediaStore {
    MediaStore::new(dir.path())
}
