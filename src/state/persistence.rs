use thiserror::Error;

use crate::i18n::{self, Language};

/// Storage key the chosen UI language is kept under
pub const LANGUAGE_STORAGE_KEY: &str = "i18nextLng";

/// Errors that can occur while reading persisted preferences
#[derive(Debug, Error, PartialEq)]
pub enum PersistenceError {
    #[error("Stored language code is not supported: {0}")]
    UnknownLanguage(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Raw language code as stored, without validation
pub fn stored_language_code(storage: &dyn eframe::Storage) -> Option<String> {
    storage.get_string(LANGUAGE_STORAGE_KEY)
}

/// Read back the persisted language, if any
pub fn try_load_language(storage: &dyn eframe::Storage) -> PersistenceResult<Option<&'static Language>> {
    match stored_language_code(storage) {
        Some(code) => i18n::find_language(&code)
            .map(Some)
            .ok_or(PersistenceError::UnknownLanguage(code)),
        None => Ok(None),
    }
}

/// Like [`try_load_language`], but drops an unsupported code with a warning
pub fn load_language(storage: &dyn eframe::Storage) -> Option<&'static Language> {
    match try_load_language(storage) {
        Ok(language) => language,
        Err(err) => {
            log::warn!("Ignoring persisted language: {}", err);
            None
        }
    }
}

pub fn store_language(storage: &mut dyn eframe::Storage, language: &Language) {
    storage.set_string(LANGUAGE_STORAGE_KEY, language.code.to_owned());
    log::debug!("Persisted UI language {}", language.code);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for the eframe storage backend
    #[derive(Default)]
    pub(crate) struct MemoryStorage {
        pub values: HashMap<String, String>,
        pub flushes: usize,
    }

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_language_round_trips_through_storage() {
        let mut storage = MemoryStorage::default();
        assert!(load_language(&storage).is_none());

        let german = i18n::find_language("de").unwrap();
        store_language(&mut storage, german);

        assert_eq!(storage.values.get(LANGUAGE_STORAGE_KEY).map(String::as_str), Some("de"));
        assert_eq!(load_language(&storage).map(|l| l.code), Some("de"));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let mut storage = MemoryStorage::default();
        storage.values.insert(LANGUAGE_STORAGE_KEY.to_owned(), "klingon".to_owned());

        assert_eq!(
            try_load_language(&storage),
            Err(PersistenceError::UnknownLanguage("klingon".to_owned()))
        );
        assert!(load_language(&storage).is_none());
    }
}
