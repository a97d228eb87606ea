use async_trait::async_trait;

/// One translation backend. Failures are recoverable by trying the next provider.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Stable identifier used in logs, e.g. the instance URL.
    fn name(&self) -> &str;

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError>;

    async fn detect(&self, text: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("provider rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("operation not supported by {0}")]
    Unsupported(String),
}
