use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ENGLISH, LanguageCode, SUPPORTED_LANGUAGES};

/// City keys, scanned before the country table. Each list starts with the primary language.
const REGION_LANGUAGES: &[(&str, &[&str])] = &[
    ("lagos", &["en", "yo", "pi", "ha"]),
    ("abuja", &["en", "ha", "pi"]),
    ("kano", &["ha", "en", "ar"]),
    ("ibadan", &["yo", "en", "pi"]),
    ("enugu", &["ig", "en", "pi"]),
    ("onitsha", &["ig", "en", "pi"]),
    ("calabar", &["en", "pi"]),
    ("nairobi", &["sw", "en"]),
    ("mombasa", &["sw", "en", "ar"]),
    ("kisumu", &["sw", "en"]),
    ("johannesburg", &["en", "zu", "xh", "so"]),
    ("cape town", &["en", "xh", "zu"]),
    ("durban", &["en", "zu"]),
    ("pretoria", &["en", "so", "zu"]),
    ("accra", &["en", "tw", "ga"]),
    ("kumasi", &["en", "tw"]),
    ("dakar", &["fr", "wo"]),
    ("bamako", &["fr", "ba"]),
];

const COUNTRY_LANGUAGES: &[(&str, &[&str])] = &[
    ("nigeria", &["en", "pi", "ha", "yo", "ig"]),
    ("kenya", &["sw", "en"]),
    ("south africa", &["en", "zu", "xh", "so"]),
    ("ghana", &["en", "tw", "ga"]),
    ("senegal", &["fr", "wo"]),
    ("mali", &["fr", "ba"]),
];

// Order matters: the first matching rule wins.
const LANGUAGE_PATTERNS: &[(&str, &str)] = &[
    ("sw", r"(?i)jambo|habari|asante|tafuta|karibu|sasa|nzuri"),
    ("yo", r"(?i)bawo ni|joor|kini|wa|pẹlẹ|e kaabo"),
    ("ha", r"(?i)sannu|yaya|ina|kwai|kana|na gode"),
    ("zu", r"(?i)sawubona|ngiyabonga|unjani|yebo|hambani"),
    ("xh", r"(?i)molo|enkosi|unjani|ewe|hayi"),
    ("ig", r"(?i)kedu|biko|daalu|ndewo|ọdịmma"),
    ("tw", r"(?i)akwaaba|medaase|ɛte sɛn|yɛ"),
    ("ga", r"(?i)ŋɛɛ|ojekoo|akpe|ayekoo"),
    ("fr", r"(?i)bonjour|merci|comment|cherche|trouve"),
    ("wo", r"(?i)nangadef|mangi fi|na nga def|jërëjëf"),
    ("ar", r"(?i)salam|shukran|kaifa|afwan|sabah"),
    ("ba", r"(?i)i ni ce|i ka kɛnɛ|a ni baara"),
    ("pi", r"(?i)abeg|wetin|dey|na|make"),
    ("so", r"(?i)dumela|re teng|kea leboha"),
];

struct LanguageRule {
    code: &'static str,
    pattern: Regex,
}

impl LanguageRule {
    fn new(code: &'static str, pattern: &str) -> Self {
        Self {
            code,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

static LANGUAGE_RULES: LazyLock<Vec<LanguageRule>> = LazyLock::new(|| {
    LANGUAGE_PATTERNS
        .iter()
        .map(|(code, pattern)| LanguageRule::new(*code, pattern))
        .collect()
});

/// Text-only rules: the formal "emi help" command is English regardless of the other tables.
static TEXT_RULES: LazyLock<Vec<LanguageRule>> = LazyLock::new(|| {
    std::iter::once(LanguageRule::new(ENGLISH, r"(?i)emi help"))
        .chain(
            LANGUAGE_PATTERNS
                .iter()
                .map(|(code, pattern)| LanguageRule::new(*code, pattern)),
        )
        .collect()
});

/// Guesses the language of `text`, preferring languages spoken around `location_hint`.
pub fn detect_language(text: &str, location_hint: Option<&str>) -> LanguageCode {
    if let Some(hint) = location_hint {
        let normalized = hint.to_lowercase();

        for table in [REGION_LANGUAGES, COUNTRY_LANGUAGES] {
            if let Some(languages) = lookup(table, &normalized) {
                let code = pick_regional_language(text, languages);
                tracing::debug!(
                    location = %hint,
                    language = code,
                    "Language resolved from location"
                );
                return LanguageCode::new(code);
            }
        }
    }

    detect_language_from_text(text)
}

/// Pure pattern matching with no location context. Defaults to English.
pub fn detect_language_from_text(text: &str) -> LanguageCode {
    let lower = text.to_lowercase();

    TEXT_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(&lower))
        .map(|rule| LanguageCode::new(rule.code))
        .unwrap_or_else(LanguageCode::english)
}

/// Languages plausible for a location, primary first. Unknown places yield English only.
pub fn region_languages(location: &str) -> Vec<LanguageCode> {
    let normalized = location.to_lowercase();

    [REGION_LANGUAGES, COUNTRY_LANGUAGES]
        .into_iter()
        .find_map(|table| lookup(table, &normalized))
        .map(|languages| languages.iter().map(LanguageCode::new).collect())
        .unwrap_or_else(|| vec![LanguageCode::english()])
}

fn lookup(
    table: &[(&str, &'static [&'static str])],
    normalized_location: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(key, _)| normalized_location.contains(*key))
        .map(|(_, languages)| *languages)
}

fn pick_regional_language(text: &str, languages: &[&'static str]) -> &'static str {
    languages
        .iter()
        .copied()
        .find(|code| {
            LANGUAGE_RULES
                .iter()
                .any(|rule| rule.code == *code && rule.pattern.is_match(text))
        })
        .unwrap_or(languages[0])
}

/// Every language the voice pipeline can handle, with its display name.
pub fn supported_languages() -> Vec<(LanguageCode, &'static str)> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|&(code, name)| (LanguageCode::new(code), name))
        .collect()
}
