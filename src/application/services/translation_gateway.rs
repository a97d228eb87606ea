use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::TranslationProvider;
use crate::domain::{ENGLISH, LanguageCode};

use super::rate_limiter::RateLimiter;
use super::translation_cache::{CacheKey, TranslationCache};

const TO_ENGLISH: &str = "to_en";
const FROM_ENGLISH: &str = "from_en";
const BETWEEN: &str = "between";
const DETECT: &str = "detect";

#[derive(Debug, Clone, Copy)]
pub struct GatewayLimits {
    pub requests_per_window: u32,
    pub window: Duration,
    pub cache_ttl: Duration,
    pub cache_max_entries: usize,
}

impl Default for GatewayLimits {
    fn default() -> Self {
        Self {
            requests_per_window: 30,
            window: Duration::from_secs(60),
            cache_ttl: Duration::from_secs(24 * 60 * 60),
            cache_max_entries: 1000,
        }
    }
}

/// Translation front door shared by the search pipeline and the translate API.
///
/// Primary providers are tried strictly in order, then the optional fallback.
/// Cache hits bypass the rate limiter; every other translation consumes one
/// slot before any provider is contacted.
pub struct TranslationGateway {
    primaries: Vec<Arc<dyn TranslationProvider>>,
    fallback: Option<Arc<dyn TranslationProvider>>,
    cache: Mutex<TranslationCache>,
    rate_limiter: Mutex<RateLimiter>,
}

impl TranslationGateway {
    pub fn new(
        primaries: Vec<Arc<dyn TranslationProvider>>,
        fallback: Option<Arc<dyn TranslationProvider>>,
        limits: GatewayLimits,
    ) -> Self {
        Self {
            primaries,
            fallback,
            cache: Mutex::new(TranslationCache::new(
                limits.cache_ttl,
                limits.cache_max_entries,
            )),
            rate_limiter: Mutex::new(RateLimiter::new(
                limits.requests_per_window,
                limits.window,
            )),
        }
    }

    pub async fn to_english(
        &self,
        text: &str,
        from: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.translate_cached(TO_ENGLISH, text, from.as_str(), ENGLISH).await
    }

    pub async fn from_english(
        &self,
        text: &str,
        to: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.translate_cached(FROM_ENGLISH, text, ENGLISH, to.as_str()).await
    }

    pub async fn between(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.translate_cached(BETWEEN, text, from.as_str(), to.as_str()).await
    }

    /// Picks the direction the way the translate API expects: English sources go
    /// through `from_english`, English targets through `to_english`.
    pub async fn translate(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
    ) -> Result<String, TranslationError> {
        if from.is_english() {
            self.from_english(text, to).await
        } else if to.is_english() {
            self.to_english(text, from).await
        } else {
            self.between(text, from, to).await
        }
    }

    /// Asks the primary providers in order. Never fails: English is assumed when
    /// none of them answers. Detection is not rate limited.
    pub async fn detect(&self, text: &str) -> LanguageCode {
        let key = CacheKey::new(DETECT, "", "", text);
        let cached = self.cache().get(&key, Instant::now());
        if let Some(code) = cached {
            return LanguageCode::new(code);
        }

        for provider in &self.primaries {
            match provider.detect(text).await {
                Ok(code) => {
                    let code = LanguageCode::new(code);
                    self.cache().insert(key, code.to_string(), Instant::now());
                    return code;
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        "Language detection failed, trying next provider"
                    );
                }
            }
        }

        tracing::warn!("Language detection failed on every provider, defaulting to English");
        LanguageCode::english()
    }

    async fn translate_cached(
        &self,
        direction: &'static str,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let key = CacheKey::new(direction, source, target, text);

        let cached = self.cache().get(&key, Instant::now());
        if let Some(translated) = cached {
            tracing::debug!(direction, from = source, to = target, "Translation served from cache");
            return Ok(translated);
        }

        let admitted = self.limiter().try_acquire(Instant::now());
        if !admitted {
            tracing::warn!(
                direction,
                from = source,
                to = target,
                "Translation rate limit exceeded"
            );
            return Err(TranslationError::RateLimitExceeded);
        }

        let mut last_error = None;

        for provider in &self.primaries {
            match provider.translate(text, source, target).await {
                Ok(translated) => {
                    self.remember(key, &translated);
                    return Ok(translated);
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        "Translation provider failed, trying next"
                    );
                    last_error = Some(e.to_string());
                }
            }
        }

        if let Some(fallback) = &self.fallback {
            match fallback.translate(text, source, target).await {
                Ok(translated) => {
                    tracing::info!(
                        provider = fallback.name(),
                        "Translated with fallback provider"
                    );
                    self.remember(key, &translated);
                    return Ok(translated);
                }
                Err(e) => {
                    tracing::warn!(
                        provider = fallback.name(),
                        error = %e,
                        "Fallback provider failed"
                    );
                    last_error = Some(e.to_string());
                }
            }
        }

        let reason = last_error.unwrap_or_else(|| "no providers configured".to_string());
        tracing::error!(
            direction,
            from = source,
            to = target,
            error = %reason,
            "All translation services failed"
        );
        Err(TranslationError::AllProvidersFailed(reason))
    }

    fn remember(&self, key: CacheKey, translated: &str) {
        self.cache()
            .insert(key, translated.to_string(), Instant::now());
    }

    fn cache(&self) -> MutexGuard<'_, TranslationCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn limiter(&self) -> MutexGuard<'_, RateLimiter> {
        self.rate_limiter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation rate limit exceeded, try again later")]
    RateLimitExceeded,
    #[error("all translation services unavailable: {0}")]
    AllProvidersFailed(String),
}
