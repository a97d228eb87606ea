use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    detect_handler, get_worker_handler, health_handler, languages_handler, list_workers_handler,
    search_handler, translate_handler, voice_search_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_audio_bytes = state.settings.speech.max_audio_bytes();

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/languages", get(languages_handler))
        .route("/api/v1/workers", get(list_workers_handler))
        .route("/api/v1/workers/{id}", get(get_worker_handler))
        .route("/api/v1/search", post(search_handler))
        .route(
            "/api/v1/voice-search",
            post(voice_search_handler).layer(DefaultBodyLimit::max(max_audio_bytes)),
        )
        .route("/api/v1/translate", post(translate_handler))
        .route("/api/v1/detect", post(detect_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
