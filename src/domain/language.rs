use std::fmt;

use serde::{Deserialize, Serialize};

pub const ENGLISH: &str = "en";

/// Languages the voice pipeline understands, in display order.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("sw", "Swahili"),
    ("yo", "Yoruba"),
    ("ha", "Hausa"),
    ("zu", "Zulu"),
    ("xh", "Xhosa"),
    ("ig", "Igbo"),
    ("tw", "Twi"),
    ("ga", "Ga"),
    ("fr", "French"),
    ("wo", "Wolof"),
    ("ar", "Arabic"),
    ("ba", "Bambara"),
    ("pi", "Pidgin"),
    ("so", "Sotho"),
];

/// Languages the translation providers can report, used to label detections.
pub const TRANSLATION_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("el", "Greek"),
    ("hu", "Hungarian"),
    ("cs", "Czech"),
    ("ro", "Romanian"),
    ("sk", "Slovak"),
    ("uk", "Ukrainian"),
    ("he", "Hebrew"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("fa", "Persian"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("bn", "Bengali"),
    ("ta", "Tamil"),
    ("ur", "Urdu"),
    ("te", "Telugu"),
    ("mr", "Marathi"),
    ("sw", "Swahili"),
    ("fil", "Filipino"),
    ("km", "Khmer"),
    ("ne", "Nepali"),
    ("si", "Sinhala"),
    ("my", "Burmese"),
    ("am", "Amharic"),
    ("zu", "Zulu"),
    ("xh", "Xhosa"),
    ("af", "Afrikaans"),
    ("ka", "Georgian"),
    ("fo", "Faroese"),
    ("is", "Icelandic"),
    ("mt", "Maltese"),
    ("ga", "Irish"),
    ("eu", "Basque"),
    ("lb", "Luxembourgish"),
    ("cy", "Welsh"),
    ("haw", "Hawaiian"),
    ("co", "Corsican"),
    ("hmn", "Hmong"),
    ("la", "Latin"),
    ("sd", "Sindhi"),
    ("iw", "Hebrew"),
    ("fy", "Frisian"),
    ("gd", "Scots Gaelic"),
    ("yi", "Yiddish"),
    ("sm", "Samoan"),
    ("gl", "Galician"),
    ("sn", "Shona"),
    ("hy", "Armenian"),
    ("jw", "Javanese"),
    ("su", "Sundanese"),
    ("ug", "Uyghur"),
    ("yo", "Yoruba"),
    ("so", "Somali"),
    ("pa", "Punjabi"),
    ("gu", "Gujarati"),
    ("or", "Odia"),
    ("tg", "Tajik"),
    ("tk", "Turkmen"),
    ("uz", "Uzbek"),
    ("ps", "Pashto"),
    ("dv", "Divehi"),
    ("ff", "Fula"),
    ("hr", "Croatian"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("ceb", "Cebuano"),
    ("ny", "Chichewa"),
    ("eo", "Esperanto"),
    ("tl", "Filipino"),
    ("ht", "Haitian Creole"),
    ("ha", "Hausa"),
    ("ig", "Igbo"),
    ("kn", "Kannada"),
    ("kk", "Kazakh"),
    ("ku", "Kurdish"),
    ("ky", "Kyrgyz"),
    ("lo", "Lao"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("mk", "Macedonian"),
    ("mg", "Malagasy"),
    ("ml", "Malayalam"),
    ("mi", "Maori"),
    ("mn", "Mongolian"),
    ("no", "Norwegian"),
    ("sl", "Slovenian"),
    ("sr", "Serbian"),
    ("st", "Sesotho"),
];

/// Short ISO-639-ish language code. Normalized to lowercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    pub fn english() -> Self {
        Self(ENGLISH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == self.0)
    }

    pub fn display_name(&self) -> Option<&'static str> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }

    /// Name for a code reported by a translation provider. Falls back to the
    /// voice table for languages the providers do not list.
    pub fn translation_name(&self) -> Option<&'static str> {
        TRANSLATION_LANGUAGES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
            .or_else(|| self.display_name())
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
