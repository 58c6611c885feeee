//! Durable user preferences backed by localStorage.
//!
//! Only the display theme is persisted. A missing or unrecognised stored
//! value falls back to [`Theme::Dark`].

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::models::Theme;
use crate::utils::dom;

/// Key-value storage for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::SaveFailed)
    }
}

/// Stored theme, or the default when nothing valid is stored.
pub fn load_theme<S: PreferenceStore>(store: &S) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Persist a theme.
pub fn save_theme<S: PreferenceStore>(store: &S, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_STORAGE_KEY, theme.as_str())
}

/// Flip `current`, persist the result and return it.
///
/// A failed write is logged; the toggle still takes effect for the session.
pub fn toggle_theme<S: PreferenceStore>(store: &S, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = save_theme(store, next) {
        dom::log_warn(&format!("Failed to persist theme: {}", e));
    }
    next
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::PreferenceStore;
    use crate::core::error::StorageError;

    /// In-memory store; `failing` rejects every write.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub entries: RefCell<HashMap<String, String>>,
        pub failing: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.failing {
                return Err(StorageError::SaveFailed);
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let store = MemoryStore::default();
        store
            .entries
            .borrow_mut()
            .insert(THEME_STORAGE_KEY.to_string(), "sepia".to_string());
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_last_value() {
        let store = MemoryStore::default();
        let original = load_theme(&store);

        let once = toggle_theme(&store, original);
        assert_eq!(once, Theme::Light);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(load_theme(&store), once);

        let twice = toggle_theme(&store, once);
        assert_eq!(twice, original);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let store = MemoryStore {
            failing: true,
            ..Default::default()
        };
        assert_eq!(toggle_theme(&store, Theme::Dark), Theme::Light);
        assert!(store.get(THEME_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_page_applies_stored_theme_before_mount() {
        // The inline script in index.html runs before the wasm module loads
        let page = include_str!("../../index.html");
        let script_end = page.find("</script>").unwrap();
        let script = &page[..script_end];

        assert!(script.contains(&format!("\"{}\"", THEME_STORAGE_KEY)));
        assert!(script.contains(&format!("\"{}\"", crate::config::THEME_ATTRIBUTE)));
        assert!(script.contains(&format!("\"{}\"", Theme::Light)));
        assert!(script.contains(&format!("var theme = \"{}\"", Theme::default())));
        // No hard-coded theme on the root element
        assert!(!page.contains("<html lang=\"en\" data-theme"));
        assert!(script_end < page.find("data-trunk rel=\"rust\"").unwrap());
    }
}
