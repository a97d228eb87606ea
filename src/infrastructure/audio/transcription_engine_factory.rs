use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriptionProvider {
    /// Hosted OpenAI Whisper; needs an API key.
    OpenAi,
    /// Self-hosted Whisper-compatible server; needs a base URL.
    SelfHosted,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::Unauthorized(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(Some(key), base_url, Some(model.to_string()));
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::SelfHosted => {
                let url = base_url.ok_or_else(|| {
                    TranscriptionError::TranscriptionFailed(
                        "base URL required for a self-hosted Whisper server".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(api_key, Some(url), Some(model.to_string()));
                Ok(Arc::new(engine))
            }
        }
    }
}
