/// A UI language the picker offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    /// Translation key for the language's display name
    pub label_key: &'static str,
}

pub const FALLBACK_LANGUAGE: &str = "en";

/// Supported languages, in picker order
pub const LANGUAGES: &[Language] = &[
    Language { code: "ar", label_key: "common:langArabic" },
    Language { code: "nl", label_key: "common:langDutch" },
    Language { code: "en", label_key: "common:langEnglish" },
    Language { code: "fr", label_key: "common:langFrench" },
    Language { code: "de", label_key: "common:langGerman" },
    Language { code: "it", label_key: "common:langItalian" },
    Language { code: "ja", label_key: "common:langJapanese" },
    Language { code: "pl", label_key: "common:langPolish" },
    Language { code: "pt_br", label_key: "common:langBrPortuguese" },
    Language { code: "ru", label_key: "common:langRussian" },
    Language { code: "zh_cn", label_key: "common:langSimplifiedChinese" },
    Language { code: "es", label_key: "common:langSpanish" },
    Language { code: "ua", label_key: "common:langUkranian" },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|language| language.code == code)
}
