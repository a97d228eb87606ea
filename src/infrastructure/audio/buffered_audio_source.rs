use async_trait::async_trait;

use crate::application::ports::{AudioSource, AudioSourceError};

/// Audio that was recorded elsewhere, e.g. uploaded by a client.
pub struct BufferedAudioSource {
    audio: Vec<u8>,
}

impl BufferedAudioSource {
    pub fn new(audio: impl Into<Vec<u8>>) -> Self {
        Self {
            audio: audio.into(),
        }
    }
}

#[async_trait]
impl AudioSource for BufferedAudioSource {
    async fn capture(&self) -> Result<Vec<u8>, AudioSourceError> {
        if self.audio.is_empty() {
            return Err(AudioSourceError::Empty);
        }
        Ok(self.audio.clone())
    }
}
