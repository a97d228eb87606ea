mod mock_speech_recognizer;
mod recognizer_probe;
mod whisper_recognizer;

pub use mock_speech_recognizer::MockSpeechRecognizer;
pub use recognizer_probe::{RecognizerCapability, RecognizerConstructor, RecognizerProbe};
pub use whisper_recognizer::WhisperRecognizer;
