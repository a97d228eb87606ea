use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use kazi::application::ports::{TranscriptionEngine, TranslationProvider};
use kazi::application::services::{
    GatewayLimits, TranslationGateway, VoiceSearchService, WorkerMatcher,
};
use kazi::infrastructure::audio::MockTranscriptionEngine;
use kazi::infrastructure::persistence::InMemoryWorkerRepository;
use kazi::infrastructure::speech::RecognizerProbe;
use kazi::infrastructure::translation::MockTranslationProvider;
use kazi::presentation::{AppState, Environment, Settings, create_router};

fn create_test_app(
    provider: MockTranslationProvider,
    limits: GatewayLimits,
    engine: Option<MockTranscriptionEngine>,
) -> axum::Router {
    let gateway = TranslationGateway::new(
        vec![Arc::new(provider) as Arc<dyn TranslationProvider>],
        None,
        limits,
    );
    let matcher = WorkerMatcher::new(Arc::new(InMemoryWorkerRepository::seeded().unwrap()));
    let engine = engine.map(|e| Arc::new(e) as Arc<dyn TranscriptionEngine>);

    let state = AppState {
        search_service: Arc::new(VoiceSearchService::new(
            Arc::new(gateway),
            Arc::new(matcher),
        )),
        recognizer: RecognizerProbe::new().whisper(engine).resolve(),
        settings: Settings::default(),
        environment: Environment::Test,
    };

    create_router(state)
}

fn default_app() -> axum::Router {
    create_test_app(
        MockTranslationProvider::succeeding("mock", "plumber in Nairobi").detecting("sw"),
        GatewayLimits::default(),
        None,
    )
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_environment() {
    let response = default_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "Test");
}

#[tokio::test]
async fn given_languages_endpoint_when_listing_then_returns_supported_languages() {
    let response = default_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/languages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(15));
    assert_eq!(body[1], json!({ "code": "sw", "name": "Swahili" }));
}

#[tokio::test]
async fn given_workers_endpoint_when_listing_then_returns_directory() {
    let response = default_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/workers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(17));
    assert_eq!(body[0]["hourlyRate"], 25);
}

#[tokio::test]
async fn given_known_worker_id_when_fetching_then_returns_worker() {
    let response = default_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/workers/w3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Kwame Mensah");
}

#[tokio::test]
async fn given_unknown_worker_id_when_fetching_then_returns_not_found() {
    let response = default_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/workers/w404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("w404"));
}

#[tokio::test]
async fn given_emi_help_query_when_searching_then_returns_parsed_query_and_workers() {
    let response = default_app()
        .oneshot(json_request(
            "/api/v1/search",
            json!({ "query": "Emi help me look for a carpenter in Accra" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["detected_language"], "en");
    assert_eq!(body["parsed"]["matchType"], "emi-help");
    assert_eq!(body["parsed"]["location"], "Accra");
    assert_eq!(body["workers"][0]["id"], "w3");
}

#[tokio::test]
async fn given_swahili_query_with_translation_when_searching_then_matches_translated_text() {
    let response = default_app()
        .oneshot(json_request(
            "/api/v1/search",
            json!({
                "query": "tafuta fundi bomba Nairobi",
                "language": "sw",
                "translate_to_english": true
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["search_text"], "plumber in Nairobi");
    assert_eq!(body["workers"][0]["id"], "w1");
}

#[tokio::test]
async fn given_blank_query_when_searching_then_returns_bad_request() {
    let response = default_app()
        .oneshot(json_request("/api/v1/search", json!({ "query": "  " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_translation_outage_when_searching_then_returns_service_unavailable() {
    let app = create_test_app(
        MockTranslationProvider::failing("mock"),
        GatewayLimits::default(),
        None,
    );

    let response = app
        .oneshot(json_request(
            "/api/v1/search",
            json!({ "query": "habari", "language": "sw", "translate_to_english": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn given_exhausted_quota_when_translating_then_returns_too_many_requests() {
    let app = create_test_app(
        MockTranslationProvider::succeeding("mock", "hello"),
        GatewayLimits {
            requests_per_window: 1,
            ..GatewayLimits::default()
        },
        None,
    );

    let first = app
        .clone()
        .oneshot(json_request(
            "/api/v1/translate",
            json!({ "text": "habari", "from": "sw", "to": "en" }),
        ))
        .await
        .unwrap();
    let second = app
        .oneshot(json_request(
            "/api/v1/translate",
            json!({ "text": "jambo", "from": "sw", "to": "en" }),
        ))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn given_auto_source_when_translating_then_detects_before_translating() {
    let response = default_app()
        .oneshot(json_request(
            "/api/v1/translate",
            json!({ "text": "tafuta fundi bomba", "to": "en" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["from"], "sw");
    assert_eq!(body["translated_text"], "plumber in Nairobi");
}

#[tokio::test]
async fn given_same_source_and_target_when_translating_then_returns_text_unchanged() {
    let response = default_app()
        .oneshot(json_request(
            "/api/v1/translate",
            json!({ "text": "hello", "from": "en", "to": "EN" }),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["translated_text"], "hello");
}

#[tokio::test]
async fn given_text_when_detecting_then_returns_code_and_name() {
    let response = default_app()
        .oneshot(json_request("/api/v1/detect", json!({ "text": "habari" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "language": "sw", "name": "Swahili" }));
}

#[tokio::test]
async fn given_detected_language_outside_voice_set_when_detecting_then_still_returns_name() {
    let app = create_test_app(
        MockTranslationProvider::succeeding("mock", "unused").detecting("es"),
        GatewayLimits::default(),
        None,
    );

    let response = app
        .oneshot(json_request("/api/v1/detect", json!({ "text": "hola amigo" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "language": "es", "name": "Spanish" }));
}

#[tokio::test]
async fn given_no_recognizer_when_voice_searching_then_returns_not_implemented() {
    let response = default_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/voice-search")
                .body(Body::from(vec![1u8, 2, 3]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn given_recorded_audio_when_voice_searching_then_searches_with_transcript() {
    let app = create_test_app(
        MockTranslationProvider::succeeding("mock", "unused"),
        GatewayLimits::default(),
        Some(MockTranscriptionEngine::new("Abeg find painter for Lagos")),
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/voice-search?language=pi&location=Lagos")
                .body(Body::from(vec![1u8, 2, 3]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["query"], "Abeg find painter for Lagos");
    assert_eq!(body["detected_language"], "pi");
    assert_eq!(body["parsed"]["matchType"], "regional");
    assert_eq!(body["workers"][0]["id"], "w5");
}

#[tokio::test]
async fn given_empty_audio_when_voice_searching_then_returns_bad_request() {
    let response = default_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/voice-search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_rejected_transcription_key_when_voice_searching_then_returns_service_unavailable() {
    let app = create_test_app(
        MockTranslationProvider::succeeding("mock", "unused"),
        GatewayLimits::default(),
        Some(MockTranscriptionEngine::rejecting("invalid api key")),
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/voice-search?language=en")
                .body(Body::from(vec![1u8, 2, 3]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
