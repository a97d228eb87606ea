use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

enum Outcome {
    Transcript(String),
    Unreachable(String),
    Rejected(String),
}

/// Returns a fixed transcript and remembers the languages it was asked for.
pub struct MockTranscriptionEngine {
    outcome: Outcome,
    languages: Mutex<Vec<String>>,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: &str) -> Self {
        Self {
            outcome: Outcome::Transcript(transcript.to_string()),
            languages: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Outcome::Unreachable(reason.to_string()),
            languages: Mutex::new(Vec::new()),
        }
    }

    /// Fails the way a service does when it refuses the configured API key.
    pub fn rejecting(reason: &str) -> Self {
        Self {
            outcome: Outcome::Rejected(reason.to_string()),
            languages: Mutex::new(Vec::new()),
        }
    }

    pub fn languages(&self) -> Vec<String> {
        self.languages
            .lock()
            .map(|l| l.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        language: &str,
    ) -> Result<String, TranscriptionError> {
        if let Ok(mut languages) = self.languages.lock() {
            languages.push(language.to_string());
        }
        match &self.outcome {
            Outcome::Transcript(text) => Ok(text.clone()),
            Outcome::Unreachable(reason) => {
                Err(TranscriptionError::ApiRequestFailed(reason.clone()))
            }
            Outcome::Rejected(reason) => Err(TranscriptionError::Unauthorized(reason.clone())),
        }
    }
}
