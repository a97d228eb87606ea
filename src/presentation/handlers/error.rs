use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{RecognitionError, RepositoryError};
use crate::application::services::{SearchError, TranslationError, VoiceCaptureError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of an API call, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.message, "Request rejected");
        }
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<TranslationError> for ApiError {
    fn from(error: TranslationError) -> Self {
        let status = match error {
            TranslationError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            TranslationError::AllProvidersFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self::new(status, error.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
    }
}

impl From<VoiceCaptureError> for ApiError {
    fn from(error: VoiceCaptureError) -> Self {
        let status = match error {
            VoiceCaptureError::Unsupported => StatusCode::NOT_IMPLEMENTED,
            VoiceCaptureError::StartFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self::new(status, error.to_string())
    }
}

impl From<SearchError> for ApiError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::Translation(e) => e.into(),
            SearchError::Directory(e) => e.into(),
            SearchError::Capture(e) => e.into(),
            SearchError::PermissionDenied => Self::new(StatusCode::FORBIDDEN, error.to_string()),
            SearchError::Recognition(RecognitionError::ServiceRefused(_)) => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, error.to_string())
            }
            SearchError::Recognition(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
            }
        }
    }
}
