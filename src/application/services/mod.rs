mod language_detection;
mod query_parser;
mod rate_limiter;
mod translation_cache;
mod translation_gateway;
mod voice_capture;
mod voice_search_service;
mod worker_matcher;

pub use language_detection::{
    detect_language, detect_language_from_text, region_languages, supported_languages,
};
pub use query_parser::{KNOWN_PROFESSIONS, extract_location, process_regional_query};
pub use rate_limiter::RateLimiter;
pub use translation_cache::{CacheKey, TranslationCache};
pub use translation_gateway::{GatewayLimits, TranslationError, TranslationGateway};
pub use voice_capture::{
    CaptureMessage, CaptureOptions, CaptureSession, VoiceCapture, VoiceCaptureError,
};
pub use voice_search_service::{SearchError, SearchOutcome, VoiceSearchService};
pub use worker_matcher::{WorkerMatcher, filter_workers};
