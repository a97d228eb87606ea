use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::application::services::{SearchOutcome, VoiceCapture};
use crate::domain::{LanguageCode, ParsedQuery, SearchOptions, Worker};
use crate::infrastructure::audio::BufferedAudioSource;
use crate::infrastructure::observability::sanitize_query;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub language: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub translate_to_english: bool,
}

/// Options for a voice search, passed as query parameters next to the audio body.
#[derive(Deserialize, Default)]
pub struct VoiceSearchParams {
    pub language: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub translate_to_english: bool,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub detected_language: LanguageCode,
    pub search_text: String,
    pub parsed: ParsedQuery,
    pub workers: Vec<Worker>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            query: outcome.query,
            detected_language: outcome.detected_language,
            search_text: outcome.search_text,
            parsed: outcome.parsed,
            workers: outcome.workers,
        }
    }
}

fn search_options(
    language: Option<String>,
    location: Option<String>,
    translate_to_english: bool,
) -> SearchOptions {
    SearchOptions {
        language: language
            .filter(|l| !l.trim().is_empty())
            .map(LanguageCode::new),
        location: location.filter(|l| !l.trim().is_empty()),
        translate_to_english,
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("query must not be empty"));
    }

    tracing::debug!(query = %sanitize_query(&request.query), "Processing search");

    let options = search_options(
        request.language,
        request.location,
        request.translate_to_english,
    );
    let outcome = state.search_service.search(&request.query, &options).await?;

    tracing::info!(results = outcome.workers.len(), "Search successful");
    Ok(Json(outcome.into()))
}

#[tracing::instrument(skip(state, params, audio), fields(bytes = audio.len()))]
pub async fn voice_search_handler(
    State(state): State<AppState>,
    Query(params): Query<VoiceSearchParams>,
    audio: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    if audio.is_empty() {
        return Err(ApiError::bad_request("audio body must not be empty"));
    }

    let recognizer = state.recognizer.as_ref().map(|capability| {
        capability.recognizer(Arc::new(BufferedAudioSource::new(audio.to_vec())))
    });
    let capture = VoiceCapture::new(recognizer);

    let options = search_options(
        params.language,
        params.location,
        params.translate_to_english,
    );
    let outcome = state
        .search_service
        .search_with_voice(&capture, &options)
        .await?;

    tracing::info!(
        results = outcome.workers.len(),
        transcript = %sanitize_query(&outcome.query),
        "Voice search successful"
    );
    Ok(Json(outcome.into()))
}
