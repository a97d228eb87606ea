use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;

use crate::application::ports::{
    RecognitionError, RecognitionEvent, SpeechRecognizer, SpeechRecognizerError,
};
use crate::domain::LanguageCode;

#[derive(Debug, Clone, Default)]
pub struct CaptureOptions {
    /// Recognition language; English when unset.
    pub language: Option<LanguageCode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureMessage {
    Interim(String),
    Final(String),
    Error(RecognitionError),
    PermissionDenied,
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceCaptureError {
    #[error("speech recognition is not supported in this runtime")]
    Unsupported,
    #[error(transparent)]
    StartFailed(#[from] SpeechRecognizerError),
}

#[derive(Debug, Default)]
struct CaptureState {
    listening: bool,
    generation: u64,
}

fn lock(state: &Mutex<CaptureState>) -> MutexGuard<'_, CaptureState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Single-session front end over a [`SpeechRecognizer`].
///
/// At most one session listens at a time. Starting while a session is active
/// stops that session first; there is no queueing.
pub struct VoiceCapture {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    state: Arc<Mutex<CaptureState>>,
}

impl VoiceCapture {
    pub fn new(recognizer: Option<Arc<dyn SpeechRecognizer>>) -> Self {
        if recognizer.is_none() {
            tracing::warn!("Speech recognition not supported, voice capture disabled");
        }
        Self {
            recognizer,
            state: Arc::new(Mutex::new(CaptureState::default())),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_listening(&self) -> bool {
        lock(&self.state).listening
    }

    pub fn start(&self, options: CaptureOptions) -> Result<CaptureSession, VoiceCaptureError> {
        let recognizer = self.recognizer.as_ref().ok_or_else(|| {
            tracing::error!("Speech recognition not supported in this runtime");
            VoiceCaptureError::Unsupported
        })?;

        if self.is_listening() {
            tracing::debug!("Stopping active capture session before starting a new one");
            self.stop();
        }

        let language = options.language.unwrap_or_else(LanguageCode::english);
        let (sender, receiver) = mpsc::unbounded_channel();

        recognizer.start(&language, sender).inspect_err(|e| {
            tracing::error!(error = %e, "Error starting speech recognition");
        })?;

        let generation = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.listening = true;
            state.generation
        };

        tracing::info!(language = %language, generation, "Voice capture started");

        Ok(CaptureSession {
            events: receiver,
            generation,
            state: Arc::clone(&self.state),
            recognizer: Arc::clone(recognizer),
            finished: false,
        })
    }

    /// No-op when idle.
    pub fn stop(&self) {
        {
            let mut state = lock(&self.state);
            if !state.listening {
                return;
            }
            state.listening = false;
        }

        if let Some(recognizer) = &self.recognizer {
            recognizer.stop();
        }
        tracing::debug!("Voice capture stopped");
    }
}

/// Handle to one listening session. Dropping an unfinished session stops it.
pub struct CaptureSession {
    events: mpsc::UnboundedReceiver<RecognitionEvent>,
    generation: u64,
    state: Arc<Mutex<CaptureState>>,
    recognizer: Arc<dyn SpeechRecognizer>,
    finished: bool,
}

impl CaptureSession {
    /// Next message from the recognizer, or `None` once the session has ended.
    pub async fn next(&mut self) -> Option<CaptureMessage> {
        if self.finished {
            return None;
        }

        let Some(event) = self.events.recv().await else {
            self.finish();
            return None;
        };

        match event {
            RecognitionEvent::Interim(text) => Some(CaptureMessage::Interim(text)),
            RecognitionEvent::Final(text) => {
                self.finish();
                Some(CaptureMessage::Final(text))
            }
            RecognitionEvent::Error(RecognitionError::NotAllowed) => {
                tracing::warn!("Microphone permission denied");
                self.finish();
                Some(CaptureMessage::PermissionDenied)
            }
            RecognitionEvent::Error(error) => {
                tracing::error!(error = %error, "Speech recognition error");
                self.finish();
                Some(CaptureMessage::Error(error))
            }
            RecognitionEvent::End => {
                self.finish();
                None
            }
        }
    }

    /// Drains the session down to its final transcript. Interim results are skipped.
    pub async fn transcript(mut self) -> Result<Option<String>, RecognitionError> {
        while let Some(message) = self.next().await {
            match message {
                CaptureMessage::Interim(text) => {
                    tracing::trace!(chars = text.len(), "Interim transcript");
                }
                CaptureMessage::Final(text) => return Ok(Some(text)),
                CaptureMessage::Error(error) => return Err(error),
                CaptureMessage::PermissionDenied => return Err(RecognitionError::NotAllowed),
            }
        }
        Ok(None)
    }

    /// Cancels this session. Has no effect once a newer session has started.
    pub fn stop(&mut self) {
        if self.finished {
            return;
        }
        if self.finish() {
            self.recognizer.stop();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Marks the session done; returns whether it was still the active one.
    fn finish(&mut self) -> bool {
        self.finished = true;
        let mut state = lock(&self.state);
        if state.generation == self.generation && state.listening {
            state.listening = false;
            return true;
        }
        false
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.stop();
    }
}
