use std::sync::Arc;

use crate::application::ports::{RecognitionError, RepositoryError};
use crate::domain::{LanguageCode, ParsedQuery, SearchOptions, SearchQuery, Worker};

use super::language_detection::detect_language;
use super::query_parser::process_regional_query;
use super::translation_gateway::{TranslationError, TranslationGateway};
use super::voice_capture::{CaptureOptions, VoiceCapture, VoiceCaptureError};
use super::worker_matcher::WorkerMatcher;

/// The search pipeline: detect → translate → parse → match.
pub struct VoiceSearchService {
    gateway: Arc<TranslationGateway>,
    matcher: Arc<WorkerMatcher>,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Text as the user said or typed it.
    pub query: String,
    pub detected_language: LanguageCode,
    /// Text the matcher actually ran on, after optional translation.
    pub search_text: String,
    pub parsed: ParsedQuery,
    pub workers: Vec<Worker>,
}

impl SearchOutcome {
    fn empty(language: LanguageCode) -> Self {
        Self {
            query: String::new(),
            detected_language: language,
            search_text: String::new(),
            parsed: ParsedQuery::default(),
            workers: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("translation: {0}")]
    Translation(#[from] TranslationError),
    #[error("directory: {0}")]
    Directory(#[from] RepositoryError),
    #[error("voice capture: {0}")]
    Capture(#[from] VoiceCaptureError),
    #[error("speech recognition: {0}")]
    Recognition(RecognitionError),
    #[error("microphone access denied")]
    PermissionDenied,
}

impl From<RecognitionError> for SearchError {
    fn from(error: RecognitionError) -> Self {
        match error {
            RecognitionError::NotAllowed => SearchError::PermissionDenied,
            other => SearchError::Recognition(other),
        }
    }
}

impl VoiceSearchService {
    pub fn new(gateway: Arc<TranslationGateway>, matcher: Arc<WorkerMatcher>) -> Self {
        Self { gateway, matcher }
    }

    pub fn matcher(&self) -> &WorkerMatcher {
        &self.matcher
    }

    pub fn gateway(&self) -> &TranslationGateway {
        &self.gateway
    }

    pub async fn search(
        &self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError> {
        let query = SearchQuery::with_options(text, options);
        self.run(&query, options.translate_to_english).await
    }

    /// Listens for one utterance and searches with its final transcript.
    /// An empty or missing transcript yields an empty result.
    pub async fn search_with_voice(
        &self,
        capture: &VoiceCapture,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError> {
        let session = capture.start(CaptureOptions {
            language: options.language.clone(),
        })?;

        let transcript = session.transcript().await?;
        match transcript.filter(|t| !t.trim().is_empty()) {
            Some(transcript) => self.search(&transcript, options).await,
            None => {
                tracing::info!("Voice search produced no transcript");
                Ok(SearchOutcome::empty(
                    options.language.clone().unwrap_or_else(LanguageCode::english),
                ))
            }
        }
    }

    #[tracing::instrument(
        skip(self, query),
        fields(match_type = tracing::field::Empty, results = tracing::field::Empty)
    )]
    async fn run(
        &self,
        query: &SearchQuery,
        translate_to_english: bool,
    ) -> Result<SearchOutcome, SearchError> {
        let language = query.language_hint.clone().unwrap_or_else(|| {
            detect_language(&query.text, query.location_hint.as_deref())
        });

        let search_text = if translate_to_english && !language.is_english() {
            self.gateway.to_english(&query.text, &language).await?
        } else {
            query.text.clone()
        };

        let parsed = process_regional_query(&search_text);
        let workers = self.matcher.search_parsed(&search_text, &parsed).await?;

        let span = tracing::Span::current();
        span.record("match_type", parsed.match_type.as_str());
        span.record("results", workers.len());

        Ok(SearchOutcome {
            query: query.text.clone(),
            detected_language: language,
            search_text,
            parsed,
            workers,
        })
    }
}
