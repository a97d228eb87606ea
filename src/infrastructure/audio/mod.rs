mod buffered_audio_source;
mod mock_transcription_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use buffered_audio_source::BufferedAudioSource;
pub use mock_transcription_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::{DEFAULT_WHISPER_MODEL, OPENAI_BASE_URL, OpenAiWhisperEngine};
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
