use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::GatewayLimits;
use crate::infrastructure::audio::TranscriptionProvider;
use crate::infrastructure::translation::TranslationProfile;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub translation: TranslationSettings,
    pub speech: SpeechSettings,
    pub directory: DirectorySettings,
}

impl Settings {
    /// `appsettings.{environment}` (optional) overlaid with `APP_*` variables,
    /// e.g. `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.file_suffix()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("translation.libre_instances")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationProfileSetting {
    #[default]
    PublicPool,
    Google,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub profile: TranslationProfileSetting,
    /// Empty means the built-in public instance list.
    pub libre_instances: Vec<String>,
    pub mymemory_endpoint: Option<String>,
    pub google_endpoint: Option<String>,
    pub google_api_key: Option<String>,
    pub requests_per_minute: u32,
    pub cooldown_secs: u64,
    pub cache_ttl_secs: u64,
    pub cache_max_entries: usize,
    pub request_timeout_secs: u64,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            profile: TranslationProfileSetting::PublicPool,
            libre_instances: Vec::new(),
            mymemory_endpoint: None,
            google_endpoint: None,
            google_api_key: None,
            requests_per_minute: 30,
            cooldown_secs: 60,
            cache_ttl_secs: 24 * 60 * 60,
            cache_max_entries: 1000,
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProviderSetting {
    #[default]
    None,
    #[serde(rename = "openai")]
    OpenAi,
    Whisper,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub provider: SpeechProviderSetting,
    pub whisper_base_url: Option<String>,
    pub whisper_model: String,
    pub api_key: Option<String>,
    pub max_audio_mb: usize,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            provider: SpeechProviderSetting::None,
            whisper_base_url: None,
            whisper_model: "whisper-1".to_string(),
            api_key: None,
            max_audio_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectorySettings {
    /// JSON array of workers; the bundled directory when unset.
    pub seed_path: Option<PathBuf>,
}

impl TranslationSettings {
    pub fn limits(&self) -> GatewayLimits {
        GatewayLimits {
            requests_per_window: self.requests_per_minute,
            window: Duration::from_secs(self.cooldown_secs),
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
            cache_max_entries: self.cache_max_entries,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn gateway_profile(&self) -> TranslationProfile {
        match self.profile {
            TranslationProfileSetting::PublicPool => TranslationProfile::PublicPool {
                libre_instances: self.libre_instances.clone(),
                mymemory_endpoint: self.mymemory_endpoint.clone(),
            },
            TranslationProfileSetting::Google => TranslationProfile::Google {
                api_key: self.google_api_key.clone().unwrap_or_default(),
                endpoint: self.google_endpoint.clone(),
            },
        }
    }
}

impl SpeechSettings {
    /// `None` when voice search is switched off.
    pub fn transcription_provider(&self) -> Option<TranscriptionProvider> {
        match self.provider {
            SpeechProviderSetting::None => None,
            SpeechProviderSetting::OpenAi => Some(TranscriptionProvider::OpenAi),
            SpeechProviderSetting::Whisper => Some(TranscriptionProvider::SelfHosted),
        }
    }

    pub fn max_audio_bytes(&self) -> usize {
        self.max_audio_mb.saturating_mul(1024 * 1024)
    }
}
