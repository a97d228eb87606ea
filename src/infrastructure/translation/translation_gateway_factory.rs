use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::{ProviderError, TranslationProvider};
use crate::application::services::{GatewayLimits, TranslationGateway};

use super::google_translate_provider::GoogleTranslateProvider;
use super::libre_translate_provider::LibreTranslateProvider;
use super::mymemory_provider::MyMemoryProvider;

pub const DEFAULT_LIBRE_INSTANCES: [&str; 5] = [
    "https://libretranslate.de",
    "https://translate.argosopentech.com",
    "https://translate.terraprint.co",
    "https://translate.fortytwo-it.com",
    "https://translate.mentality.rip",
];

#[derive(Debug, Clone, PartialEq)]
pub enum TranslationProfile {
    /// Public LibreTranslate instances in order, MyMemory as the last resort.
    PublicPool {
        libre_instances: Vec<String>,
        mymemory_endpoint: Option<String>,
    },
    /// Google Cloud Translation only.
    Google {
        api_key: String,
        endpoint: Option<String>,
    },
}

pub struct TranslationGatewayFactory;

impl TranslationGatewayFactory {
    pub fn create(
        profile: TranslationProfile,
        limits: GatewayLimits,
        request_timeout: Duration,
    ) -> Result<TranslationGateway, ProviderError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ProviderError::ApiRequestFailed(format!("http client: {}", e)))?;

        match profile {
            TranslationProfile::PublicPool {
                libre_instances,
                mymemory_endpoint,
            } => {
                let instances = if libre_instances.is_empty() {
                    DEFAULT_LIBRE_INSTANCES.iter().map(|s| s.to_string()).collect()
                } else {
                    libre_instances
                };

                tracing::info!(instances = instances.len(), "Using public translation pool");

                let primaries = instances
                    .into_iter()
                    .map(|instance| {
                        Arc::new(LibreTranslateProvider::with_client(client.clone(), instance))
                            as Arc<dyn TranslationProvider>
                    })
                    .collect();
                let fallback: Arc<dyn TranslationProvider> =
                    Arc::new(MyMemoryProvider::with_client(client, mymemory_endpoint));

                Ok(TranslationGateway::new(primaries, Some(fallback), limits))
            }
            TranslationProfile::Google { api_key, endpoint } => {
                if api_key.trim().is_empty() {
                    return Err(ProviderError::ApiRequestFailed(
                        "API key required for Google Translate".to_string(),
                    ));
                }

                tracing::info!("Using Google Translate");

                let provider: Arc<dyn TranslationProvider> =
                    Arc::new(GoogleTranslateProvider::with_client(client, api_key, endpoint));

                Ok(TranslationGateway::new(vec![provider], None, limits))
            }
        }
    }
}
