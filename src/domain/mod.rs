mod language;
mod parsed_query;
mod search_query;
mod worker;

pub use language::{ENGLISH, LanguageCode, SUPPORTED_LANGUAGES, TRANSLATION_LANGUAGES};
pub use parsed_query::{MatchType, ParsedQuery};
pub use search_query::{SearchOptions, SearchQuery};
pub use worker::{Worker, WorkerId};
