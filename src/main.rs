use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use kazi::application::ports::{TranscriptionEngine, WorkerRepository};
use kazi::application::services::{VoiceSearchService, WorkerMatcher};
use kazi::infrastructure::audio::TranscriptionEngineFactory;
use kazi::infrastructure::observability::{TracingConfig, init_tracing};
use kazi::infrastructure::persistence::InMemoryWorkerRepository;
use kazi::infrastructure::speech::RecognizerProbe;
use kazi::infrastructure::translation::TranslationGatewayFactory;
use kazi::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = match environment {
        Environment::Prod => TracingConfig::production(environment.as_str()),
        _ => TracingConfig::new(environment.as_str()),
    };
    init_tracing(&tracing_config)?;

    let repository: Arc<dyn WorkerRepository> = Arc::new(
        InMemoryWorkerRepository::load(settings.directory.seed_path.as_deref())
            .await
            .context("Failed to load worker directory")?,
    );

    let gateway = TranslationGatewayFactory::create(
        settings.translation.gateway_profile(),
        settings.translation.limits(),
        settings.translation.request_timeout(),
    )
    .context("Failed to build translation gateway")?;

    let engine: Option<Arc<dyn TranscriptionEngine>> =
        match settings.speech.transcription_provider() {
            Some(provider) => Some(
                TranscriptionEngineFactory::create(
                    provider,
                    &settings.speech.whisper_model,
                    settings.speech.api_key.clone(),
                    settings.speech.whisper_base_url.clone(),
                )
                .context("Failed to build transcription engine")?,
            ),
            None => None,
        };
    let recognizer = RecognizerProbe::new().whisper(engine).resolve();

    let search_service = Arc::new(VoiceSearchService::new(
        Arc::new(gateway),
        Arc::new(WorkerMatcher::new(repository)),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        search_service,
        recognizer,
        settings,
        environment,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
