use tokio::sync::mpsc;

use crate::domain::LanguageCode;

/// A speech-to-text capability that streams its results as events.
///
/// `start` must return promptly; recognition happens in the background and is
/// reported through `events`. Every session ends with either a `Final`, an
/// `Error` or an `End` event, unless `stop` is called first.
pub trait SpeechRecognizer: Send + Sync {
    fn start(
        &self,
        language: &LanguageCode,
        events: mpsc::UnboundedSender<RecognitionEvent>,
    ) -> Result<(), SpeechRecognizerError>;

    fn stop(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Interim(String),
    Final(String),
    Error(RecognitionError),
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
    #[error("no speech detected")]
    NoSpeech,
    #[error("audio capture failed: {0}")]
    AudioCapture(String),
    #[error("recognition service unreachable: {0}")]
    Network(String),
    #[error("microphone access denied")]
    NotAllowed,
    #[error("recognition aborted")]
    Aborted,
    #[error("recognition service refused the request: {0}")]
    ServiceRefused(String),
    #[error("recognition failed: {0}")]
    Other(String),
}

impl RecognitionError {
    /// Maps the error codes used by browser speech engines.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => Self::NoSpeech,
            "audio-capture" => Self::AudioCapture(code.to_string()),
            "network" => Self::Network(code.to_string()),
            "not-allowed" | "service-not-allowed" => Self::NotAllowed,
            "aborted" => Self::Aborted,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechRecognizerError {
    #[error("recognizer failed to start: {0}")]
    StartFailed(String),
}
