use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::domain::LanguageCode;
use crate::infrastructure::observability::sanitize_query;
use crate::presentation::state::AppState;

use super::error::ApiError;

const AUTO: &str = "auto";

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// A language code, or `auto` to detect it first.
    #[serde(default = "auto")]
    pub from: String,
    pub to: String,
}

fn auto() -> String {
    AUTO.to_string()
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
}

#[derive(Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct DetectResponse {
    pub language: LanguageCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

#[tracing::instrument(skip(state, request), fields(from = %request.from, to = %request.to))]
pub async fn translate_handler(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }
    if request.to.trim().is_empty() || request.to.eq_ignore_ascii_case(AUTO) {
        return Err(ApiError::bad_request("target language is required"));
    }

    tracing::debug!(text = %sanitize_query(&request.text), "Translating");

    let gateway = state.search_service.gateway();
    let from = if request.from.eq_ignore_ascii_case(AUTO) {
        gateway.detect(&request.text).await
    } else {
        LanguageCode::new(&request.from)
    };
    let to = LanguageCode::new(&request.to);

    let translated_text = if from == to {
        request.text
    } else {
        gateway.translate(&request.text, &from, &to).await?
    };

    Ok(Json(TranslateResponse {
        translated_text,
        from,
        to,
    }))
}

pub async fn detect_handler(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }

    let language = state.search_service.gateway().detect(&request.text).await;
    let name = language.translation_name();

    Ok(Json(DetectResponse { language, name }))
}
