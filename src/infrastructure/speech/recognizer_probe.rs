use std::sync::Arc;

use crate::application::ports::{AudioSource, SpeechRecognizer, TranscriptionEngine};

use super::whisper_recognizer::WhisperRecognizer;

/// Builds a recognizer for one capture, given where its audio comes from.
pub type RecognizerConstructor =
    Arc<dyn Fn(Arc<dyn AudioSource>) -> Arc<dyn SpeechRecognizer> + Send + Sync>;

type Probe = Box<dyn Fn() -> Option<RecognizerConstructor> + Send + Sync>;

#[derive(Clone)]
pub struct RecognizerCapability {
    pub name: String,
    pub constructor: RecognizerConstructor,
}

impl RecognizerCapability {
    pub fn recognizer(&self, source: Arc<dyn AudioSource>) -> Arc<dyn SpeechRecognizer> {
        (self.constructor)(source)
    }
}

/// Ordered list of recognizer candidates. The first available one wins.
#[derive(Default)]
pub struct RecognizerProbe {
    candidates: Vec<(String, Probe)>,
}

impl RecognizerProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate<F>(mut self, name: &str, probe: F) -> Self
    where
        F: Fn() -> Option<RecognizerConstructor> + Send + Sync + 'static,
    {
        self.candidates.push((name.to_string(), Box::new(probe)));
        self
    }

    /// Adds a Whisper-backed candidate, available only when an engine is configured.
    pub fn whisper(self, engine: Option<Arc<dyn TranscriptionEngine>>) -> Self {
        self.candidate("whisper", move || {
            engine.clone().map(|engine| {
                Arc::new(move |source: Arc<dyn AudioSource>| {
                    Arc::new(WhisperRecognizer::new(source, Arc::clone(&engine)))
                        as Arc<dyn SpeechRecognizer>
                }) as RecognizerConstructor
            })
        })
    }

    pub fn resolve(&self) -> Option<RecognizerCapability> {
        for (name, probe) in &self.candidates {
            if let Some(constructor) = probe() {
                tracing::info!(recognizer = %name, "Speech recognition available");
                return Some(RecognizerCapability {
                    name: name.clone(),
                    constructor,
                });
            }
            tracing::debug!(recognizer = %name, "Speech recognizer candidate unavailable");
        }

        tracing::warn!("No speech recognizer available, voice search disabled");
        None
    }
}
