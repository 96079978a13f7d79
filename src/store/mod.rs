pub mod note_store;
pub mod prefs;
pub mod storage;
pub mod task_store;

pub use note_store::*;
pub use prefs::*;
pub use storage::*;
pub use task_store::*;

use log::warn;
use serde::Serialize;

/// Re-serialize a whole collection to its storage key. An empty
/// collection removes the key instead of storing `[]`. Failures are
/// logged and dropped; in-memory state stays authoritative.
pub(crate) fn persist_collection<S: Storage, T: Serialize>(storage: &mut S, key: &str, items: &[T]) {
    if items.is_empty() {
        if let Err(e) = storage.remove(key) {
            warn!("dropping removal of '{key}': {e}");
        }
        return;
    }
    match serde_json::to_string(items) {
        Ok(raw) => {
            if let Err(e) = storage.write(key, &raw) {
                warn!("dropping write of '{key}': {e}");
            }
        }
        Err(e) => warn!("could not serialize '{key}': {e}"),
    }
}

/// Fail-soft load: absent key or malformed JSON is an empty collection.
pub(crate) fn load_collection<S: Storage, T: serde::de::DeserializeOwned>(
    storage: &S,
    key: &str,
) -> Vec<T> {
    let Some(raw) = storage.read(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::debug!("discarding malformed '{key}' blob: {e}");
            Vec::new()
        }
    }
}
