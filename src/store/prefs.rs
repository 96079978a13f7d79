use log::warn;

use crate::store::storage::Storage;

/// Storage key for the dark-mode presentation flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Storage key for the signed-in user's email
pub const SESSION_KEY: &str = "session";

/// Dark-mode flag, stored as the literal string "true"/"false".
/// Anything else (including an absent key) reads as false.
pub fn dark_mode<S: Storage>(storage: &S) -> bool {
    storage.read(DARK_MODE_KEY).as_deref() == Some("true")
}

pub fn set_dark_mode<S: Storage>(storage: &mut S, on: bool) {
    let value = if on { "true" } else { "false" };
    if let Err(e) = storage.write(DARK_MODE_KEY, value) {
        warn!("dropping write of '{DARK_MODE_KEY}': {e}");
    }
}

/// Email of the signed-in user, if any
pub fn session<S: Storage>(storage: &S) -> Option<String> {
    storage.read(SESSION_KEY).filter(|s| !s.is_empty())
}

pub fn set_session<S: Storage>(storage: &mut S, email: &str) {
    if let Err(e) = storage.write(SESSION_KEY, email) {
        warn!("dropping write of '{SESSION_KEY}': {e}");
    }
}

pub fn clear_session<S: Storage>(storage: &mut S) {
    if let Err(e) = storage.remove(SESSION_KEY) {
        warn!("dropping removal of '{SESSION_KEY}': {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::storage::MemStorage;

    #[test]
    fn dark_mode_defaults_to_false() {
        assert!(!dark_mode(&MemStorage::new()));
    }

    #[test]
    fn dark_mode_round_trips() {
        let mut storage = MemStorage::new();
        set_dark_mode(&mut storage, true);
        assert_eq!(storage.read(DARK_MODE_KEY).as_deref(), Some("true"));
        assert!(dark_mode(&storage));
        set_dark_mode(&mut storage, false);
        assert!(!dark_mode(&storage));
    }

    #[test]
    fn garbage_dark_mode_value_reads_as_false() {
        let mut storage = MemStorage::new();
        storage.write(DARK_MODE_KEY, "maybe").unwrap();
        assert!(!dark_mode(&storage));
    }

    #[test]
    fn session_set_and_clear() {
        let mut storage = MemStorage::new();
        assert!(session(&storage).is_none());
        set_session(&mut storage, "dana@example.com");
        assert_eq!(session(&storage).as_deref(), Some("dana@example.com"));
        clear_session(&mut storage);
        assert!(session(&storage).is_none());
    }
}
