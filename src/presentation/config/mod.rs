mod environment;
mod settings;

pub use environment::{Environment, UnknownEnvironment};
pub use settings::{
    DirectorySettings, ServerSettings, Settings, SpeechProviderSetting, SpeechSettings,
    TranslationProfileSetting, TranslationSettings,
};
