use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use super::languages::{FALLBACK_LANGUAGE, Language, find_language};

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("Invalid translation bundle for {code}: {source}")]
    InvalidBundle {
        code: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Translation bundle for {0} must be a JSON object")]
    NotAnObject(String),
}

/// Bundles compiled into the binary
const EMBEDDED_BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("de", include_str!("../../locales/de.json")),
    ("fr", include_str!("../../locales/fr.json")),
];

/// Key -> string lookup over nested JSON bundles.
///
/// Keys look like `namespace:path.to.key` or `path.to.key`. A key missing
/// from the current language falls back to English, then to the key itself.
#[derive(Debug, Clone)]
pub struct Translator {
    current: &'static Language,
    bundles: HashMap<&'static str, Value>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::empty()
    }
}

impl Translator {
    /// A translator with no bundles; every lookup returns its key
    pub fn empty() -> Self {
        Self {
            current: fallback_language(),
            bundles: HashMap::new(),
        }
    }

    /// A translator loaded with the bundles shipped in `locales/`
    pub fn with_embedded_locales() -> Result<Self, I18nError> {
        let mut translator = Self::empty();
        for (code, json) in EMBEDDED_BUNDLES {
            translator.add_bundle(code, json)?;
        }
        Ok(translator)
    }

    /// Parse and install the bundle for a language, replacing any previous one
    pub fn add_bundle(&mut self, code: &str, json: &str) -> Result<(), I18nError> {
        let language = find_language(code).ok_or_else(|| I18nError::UnknownLanguage(code.to_owned()))?;
        let bundle: Value = serde_json::from_str(json).map_err(|source| I18nError::InvalidBundle {
            code: code.to_owned(),
            source,
        })?;
        if !bundle.is_object() {
            return Err(I18nError::NotAnObject(code.to_owned()));
        }
        self.bundles.insert(language.code, bundle);
        Ok(())
    }

    pub fn has_bundle(&self, code: &str) -> bool {
        self.bundles.contains_key(code)
    }

    pub fn language(&self) -> &'static Language {
        self.current
    }

    /// Switch language. Languages without a bundle resolve through English.
    pub fn set_language(&mut self, code: &str) -> Result<&'static Language, I18nError> {
        let language = find_language(code).ok_or_else(|| I18nError::UnknownLanguage(code.to_owned()))?;
        if !self.has_bundle(language.code) {
            log::warn!("No translations for {}, falling back to {}", language.code, FALLBACK_LANGUAGE);
        }
        self.current = language;
        log::info!("UI language set to {}", language.code);
        Ok(language)
    }

    /// Look up a key in the current language
    pub fn t(&self, key: &str) -> String {
        self.lookup(self.current.code, key)
            .or_else(|| self.lookup(FALLBACK_LANGUAGE, key))
            .unwrap_or_else(|| key.to_owned())
    }

    fn lookup(&self, code: &str, key: &str) -> Option<String> {
        let mut node = self.bundles.get(code)?;
        let (namespace, path) = match key.split_once(':') {
            Some((namespace, path)) => (Some(namespace), path),
            None => (None, key),
        };
        if let Some(namespace) = namespace {
            node = node.get(namespace)?;
        }
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        node.as_str().map(str::to_owned)
    }
}

fn fallback_language() -> &'static Language {
    // The fallback is always part of the language table.
    find_language(FALLBACK_LANGUAGE).unwrap_or(&super::languages::LANGUAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_translator_echoes_keys() {
        let translator = Translator::empty();
        assert_eq!(translator.t("common:langGerman"), "common:langGerman");
    }

    #[test]
    fn test_embedded_bundles_parse() {
        let translator = Translator::with_embedded_locales().unwrap();
        assert!(translator.has_bundle("en"));
        assert!(translator.has_bundle("de"));
        assert!(translator.has_bundle("fr"));
    }

    #[test]
    fn test_bundle_must_be_object() {
        let mut translator = Translator::empty();
        assert!(matches!(
            translator.add_bundle("en", "[1, 2]"),
            Err(I18nError::NotAnObject(_))
        ));
        assert!(matches!(
            translator.add_bundle("en", "{"),
            Err(I18nError::InvalidBundle { .. })
        ));
        assert!(matches!(
            translator.add_bundle("xx", "{}"),
            Err(I18nError::UnknownLanguage(_))
        ));
    }
}
