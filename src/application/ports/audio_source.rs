use async_trait::async_trait;

/// Where a recognizer reads captured speech from.
#[async_trait]
pub trait AudioSource: Send + Sync {
    async fn capture(&self) -> Result<Vec<u8>, AudioSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioSourceError {
    #[error("microphone access denied")]
    PermissionDenied,
    #[error("no audio captured")]
    Empty,
    #[error("audio capture failed: {0}")]
    CaptureFailed(String),
}
