use std::collections::HashMap;

use canvas_studio::event::{EventBus, EventRecorder, StudioEvent};
use canvas_studio::i18n::{FALLBACK_LANGUAGE, I18nError, LANGUAGES, LanguagePicker, Translator};
use canvas_studio::state::LANGUAGE_STORAGE_KEY;
use canvas_studio::state::persistence::{load_language, stored_language_code};

#[derive(Default)]
struct MemoryStorage {
    values: HashMap<String, String>,
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}

fn translator() -> Translator {
    Translator::with_embedded_locales().unwrap()
}

#[test]
fn test_defaults_to_english() {
    let translator = translator();
    assert_eq!(translator.language().code, FALLBACK_LANGUAGE);
    assert_eq!(translator.t("unifiedcanvas:brush"), "Brush");
}

#[test]
fn test_missing_keys_fall_back_to_english_then_key() {
    let mut translator = translator();
    translator.set_language("de").unwrap();
    assert_eq!(translator.t("unifiedcanvas:brush"), "Pinsel");
    // Not translated to German yet
    assert_eq!(translator.t("unifiedcanvas:staging"), "Staging");
    assert_eq!(translator.t("unifiedcanvas:noSuchKey"), "unifiedcanvas:noSuchKey");
}

#[test]
fn test_language_without_bundle_uses_english() {
    let mut translator = translator();
    let language = translator.set_language("ja").unwrap();
    assert_eq!(language.code, "ja");
    assert_eq!(translator.t("unifiedcanvas:eraser"), "Eraser");
}

#[test]
fn test_unknown_language_keeps_current() {
    let mut translator = translator();
    translator.set_language("fr").unwrap();
    assert!(matches!(translator.set_language("xx"), Err(I18nError::UnknownLanguage(_))));
    assert_eq!(translator.language().code, "fr");
}

#[test]
fn test_picker_marks_only_stored_language() {
    let translator = translator();
    let options = LanguagePicker::options(&translator, Some("pt_br"));
    assert_eq!(options.len(), LANGUAGES.len());
    let selected: Vec<_> = options.iter().filter(|o| o.selected).map(|o| o.code).collect();
    assert_eq!(selected, vec!["pt_br"]);

    let options = LanguagePicker::options(&translator, None);
    assert!(options.iter().all(|o| !o.selected));
}

#[test]
fn test_choose_persists_and_announces() {
    let mut translator = translator();
    let mut storage = MemoryStorage::default();
    let bus = EventBus::new();
    let recorder = EventRecorder::new();
    bus.subscribe(Box::new(recorder.clone()));

    let language = LanguagePicker::choose("de", &mut translator, &mut storage, &bus).unwrap();
    assert_eq!(language.code, "de");
    assert_eq!(translator.language().code, "de");
    assert_eq!(storage.values.get(LANGUAGE_STORAGE_KEY).map(String::as_str), Some("de"));
    assert_eq!(stored_language_code(&storage).as_deref(), Some("de"));
    assert_eq!(load_language(&storage).map(|l| l.code), Some("de"));
    assert_eq!(recorder.events(), vec![StudioEvent::LanguageChanged { code: "de" }]);

    // The picker reads the stored value at render time
    let options = LanguagePicker::options(&translator, stored_language_code(&storage).as_deref());
    assert_eq!(options.iter().find(|o| o.selected).map(|o| o.code), Some("de"));
}

#[test]
fn test_choose_unknown_language_changes_nothing() {
    let mut translator = translator();
    let mut storage = MemoryStorage::default();
    let bus = EventBus::new();

    assert!(LanguagePicker::choose("xx", &mut translator, &mut storage, &bus).is_err());
    assert!(storage.values.is_empty());
    assert_eq!(translator.language().code, FALLBACK_LANGUAGE);
}
