mod audio_source;
mod repository_error;
mod speech_recognizer;
mod transcription_engine;
mod translation_provider;
mod worker_repository;

pub use audio_source::{AudioSource, AudioSourceError};
pub use repository_error::RepositoryError;
pub use speech_recognizer::{
    RecognitionError, RecognitionEvent, SpeechRecognizer, SpeechRecognizerError,
};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_provider::{ProviderError, TranslationProvider};
pub use worker_repository::WorkerRepository;
