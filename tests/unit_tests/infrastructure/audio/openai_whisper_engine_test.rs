use axum::Router;
use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use kazi::application::ports::{TranscriptionEngine, TranscriptionError};
use kazi::infrastructure::audio::{
    OpenAiWhisperEngine, TranscriptionEngineFactory, TranscriptionProvider,
};

async fn start_mock_whisper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v1/audio/transcriptions",
        post(move || async move {
            let status = StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/v1", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, "  find a plumber \n").await;

    let engine = OpenAiWhisperEngine::new(Some("key".to_string()), Some(base_url), None);
    let result = engine.transcribe(b"fake audio", "en").await;

    assert_eq!(result.unwrap(), "find a plumber");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rejected_key_when_transcribing_then_returns_unauthorized() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(401, "invalid key").await;

    let engine = OpenAiWhisperEngine::new(Some("bad".to_string()), Some(base_url), None);
    let result = engine.transcribe(b"fake audio", "en").await;

    assert!(matches!(result, Err(TranscriptionError::Unauthorized(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_transcribing_then_returns_transcription_failed() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(500, "model crashed").await;

    let engine = OpenAiWhisperEngine::new(None, Some(base_url), None);
    let result = engine.transcribe(b"fake audio", "sw").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::TranscriptionFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_language_and_key_when_transcribing_then_sends_form_fields_and_bearer() {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = Router::new().route(
        "/audio/transcriptions",
        post(|headers: HeaderMap, mut multipart: Multipart| async move {
            assert_eq!(
                headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok()),
                Some("Bearer key")
            );
            let mut fields = Vec::new();
            while let Some(field) = multipart.next_field().await.unwrap() {
                let name = field.name().unwrap_or_default().to_string();
                let value = field.text().await.unwrap_or_default();
                fields.push((name, value));
            }
            assert!(fields.contains(&("language".to_string(), "yo".to_string())));
            assert!(fields.contains(&("model".to_string(), "whisper-1".to_string())));
            "bawo ni"
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    let engine = OpenAiWhisperEngine::new(Some("key".to_string()), Some(base_url), None);
    let result = engine.transcribe(b"fake audio", "yo").await;

    assert_eq!(result.unwrap(), "bawo ni");
    shutdown_tx.send(()).ok();
}

#[test]
fn given_openai_provider_without_key_when_creating_engine_then_fails() {
    let result =
        TranscriptionEngineFactory::create(TranscriptionProvider::OpenAi, "whisper-1", None, None);

    assert!(matches!(result, Err(TranscriptionError::Unauthorized(_))));
}

#[test]
fn given_self_hosted_provider_without_url_when_creating_engine_then_fails() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::SelfHosted,
        "whisper-1",
        None,
        None,
    );

    assert!(result.is_err());
}

#[test]
fn given_self_hosted_provider_with_url_when_creating_engine_then_succeeds() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::SelfHosted,
        "base",
        None,
        Some("http://localhost:8000/v1".to_string()),
    );

    assert!(result.is_ok());
}
