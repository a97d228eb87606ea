use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc;

use crate::application::ports::{RecognitionEvent, SpeechRecognizer, SpeechRecognizerError};
use crate::domain::LanguageCode;

/// Replays a fixed list of events on every start.
///
/// An empty script leaves the session listening until it is stopped.
pub struct MockSpeechRecognizer {
    script: Vec<RecognitionEvent>,
    refuse_start: bool,
    open: Mutex<Vec<mpsc::UnboundedSender<RecognitionEvent>>>,
    starts: AtomicUsize,
    stops: AtomicUsize,
}

impl MockSpeechRecognizer {
    pub fn new(script: Vec<RecognitionEvent>) -> Self {
        Self {
            script,
            refuse_start: false,
            open: Mutex::new(Vec::new()),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
        }
    }

    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    pub fn refusing_start() -> Self {
        Self {
            refuse_start: true,
            ..Self::silent()
        }
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl SpeechRecognizer for MockSpeechRecognizer {
    fn start(
        &self,
        _language: &LanguageCode,
        events: mpsc::UnboundedSender<RecognitionEvent>,
    ) -> Result<(), SpeechRecognizerError> {
        if self.refuse_start {
            return Err(SpeechRecognizerError::StartFailed(
                "microphone busy".to_string(),
            ));
        }

        self.starts.fetch_add(1, Ordering::SeqCst);
        for event in &self.script {
            let _ = events.send(event.clone());
        }
        if self.script.is_empty() {
            self.open
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(events);
        }
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
