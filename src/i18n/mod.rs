//! Localisation: translated UI strings and the language picker.
//!
//! Translations are JSON bundles keyed like `common:langEnglish`. English is
//! always the fallback, and a key with no translation anywhere is shown as is.

mod languages;
mod picker;
mod translator;

pub use languages::{FALLBACK_LANGUAGE, LANGUAGES, Language, find_language};
pub use picker::{LanguageOption, LanguagePicker};
pub use translator::{I18nError, Translator};
