use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{ProviderError, TranslationProvider};

/// Scripted provider that counts every call it receives.
pub struct MockTranslationProvider {
    name: String,
    translation: Option<String>,
    detected: Option<String>,
    translate_calls: AtomicUsize,
    detect_calls: AtomicUsize,
}

impl MockTranslationProvider {
    pub fn succeeding(name: &str, translation: &str) -> Self {
        Self {
            name: name.to_string(),
            translation: Some(translation.to_string()),
            detected: None,
            translate_calls: AtomicUsize::new(0),
            detect_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            translation: None,
            detected: None,
            translate_calls: AtomicUsize::new(0),
            detect_calls: AtomicUsize::new(0),
        }
    }

    pub fn detecting(mut self, language: &str) -> Self {
        self.detected = Some(language.to_string());
        self
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranslationProvider for MockTranslationProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, ProviderError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        self.translation
            .clone()
            .ok_or_else(|| ProviderError::ApiRequestFailed(format!("{} is down", self.name)))
    }

    async fn detect(&self, _text: &str) -> Result<String, ProviderError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.detected
            .clone()
            .ok_or_else(|| ProviderError::ApiRequestFailed(format!("{} is down", self.name)))
    }
}
