use super::{I18nError, LANGUAGES, Language, Translator};
use crate::event::{EventBus, StudioEvent};
use crate::state::persistence;

/// One row of the language menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Language menu model: lists the languages and applies a choice
pub struct LanguagePicker;

impl LanguagePicker {
    /// Menu rows, labelled in the current language.
    ///
    /// `stored` is the persisted language code, read at render time; it
    /// alone decides which row is marked.
    pub fn options(translator: &Translator, stored: Option<&str>) -> Vec<LanguageOption> {
        LANGUAGES
            .iter()
            .map(|language| LanguageOption {
                code: language.code,
                label: translator.t(language.label_key),
                selected: stored == Some(language.code),
            })
            .collect()
    }

    /// Switch the UI language and persist the choice
    pub fn choose(
        code: &str,
        translator: &mut Translator,
        storage: &mut dyn eframe::Storage,
        event_bus: &EventBus,
    ) -> Result<&'static Language, I18nError> {
        let language = translator.set_language(code)?;
        persistence::store_language(storage, language);
        event_bus.emit(StudioEvent::LanguageChanged { code: language.code });
        Ok(language)
    }
}
