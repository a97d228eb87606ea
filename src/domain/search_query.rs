use super::LanguageCode;

/// Per-invocation search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub language_hint: Option<LanguageCode>,
    pub location_hint: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language_hint: None,
            location_hint: None,
        }
    }

    pub fn with_options(text: impl Into<String>, options: &SearchOptions) -> Self {
        Self {
            text: text.into(),
            language_hint: options.language.clone(),
            location_hint: options.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub language: Option<LanguageCode>,
    pub location: Option<String>,
    pub translate_to_english: bool,
}
