use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::application::ports::{
    AudioSource, AudioSourceError, RecognitionError, RecognitionEvent, SpeechRecognizer,
    SpeechRecognizerError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::LanguageCode;

/// Recognizer that records one utterance from an [`AudioSource`] and hands it
/// to a [`TranscriptionEngine`]. It only ever reports a final result.
pub struct WhisperRecognizer {
    source: Arc<dyn AudioSource>,
    engine: Arc<dyn TranscriptionEngine>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl WhisperRecognizer {
    pub fn new(source: Arc<dyn AudioSource>, engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self {
            source,
            engine,
            task: Mutex::new(None),
        }
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn start(
        &self,
        language: &LanguageCode,
        events: mpsc::UnboundedSender<RecognitionEvent>,
    ) -> Result<(), SpeechRecognizerError> {
        let runtime =
            Handle::try_current().map_err(|e| SpeechRecognizerError::StartFailed(e.to_string()))?;

        let source = Arc::clone(&self.source);
        let engine = Arc::clone(&self.engine);
        let language = language.clone();

        let handle = runtime.spawn(async move {
            let event = recognize(source.as_ref(), engine.as_ref(), &language).await;
            let _ = events.send(event);
            let _ = events.send(RecognitionEvent::End);
        });

        let previous = self
            .task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }

        Ok(())
    }

    fn stop(&self) {
        let task = self
            .task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = task {
            task.abort();
        }
    }
}

async fn recognize(
    source: &dyn AudioSource,
    engine: &dyn TranscriptionEngine,
    language: &LanguageCode,
) -> RecognitionEvent {
    let audio = match source.capture().await {
        Ok(audio) => audio,
        Err(AudioSourceError::PermissionDenied) => {
            return RecognitionEvent::Error(RecognitionError::NotAllowed);
        }
        Err(AudioSourceError::Empty) => return RecognitionEvent::Error(RecognitionError::NoSpeech),
        Err(AudioSourceError::CaptureFailed(reason)) => {
            return RecognitionEvent::Error(RecognitionError::AudioCapture(reason));
        }
    };

    match engine.transcribe(&audio, language.as_str()).await {
        Ok(text) if text.trim().is_empty() => RecognitionEvent::Error(RecognitionError::NoSpeech),
        Ok(text) => RecognitionEvent::Final(text),
        Err(TranscriptionError::ApiRequestFailed(reason)) => {
            RecognitionEvent::Error(RecognitionError::Network(reason))
        }
        Err(TranscriptionError::Unauthorized(reason)) => {
            tracing::error!(reason = %reason, "Transcription service rejected credentials");
            RecognitionEvent::Error(RecognitionError::ServiceRefused(reason))
        }
        Err(TranscriptionError::TranscriptionFailed(reason)) => {
            RecognitionEvent::Error(RecognitionError::Other(reason))
        }
    }
}
