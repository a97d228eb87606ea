use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderError, TranslationProvider};

pub const GOOGLE_TRANSLATE_ENDPOINT: &str =
    "https://translation.googleapis.com/language/translate/v2";

/// Key-authenticated Google Cloud Translation v2.
pub struct GoogleTranslateProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    source: &'a str,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct Translations {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

#[derive(Deserialize)]
struct Detections {
    detections: Vec<Vec<Detection>>,
}

#[derive(Deserialize)]
struct Detection {
    language: String,
}

impl GoogleTranslateProvider {
    pub fn new(api_key: String, endpoint: Option<String>) -> Self {
        Self::with_client(Client::new(), api_key, endpoint)
    }

    pub fn with_client(client: Client, api_key: String, endpoint: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint
                .unwrap_or_else(|| GOOGLE_TRANSLATE_ENDPOINT.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
        }
    }

    async fn post<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ProviderError> {
        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    fn name(&self) -> &str {
        "google-translate"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let body: Envelope<Translations> = self
            .post(
                &self.endpoint,
                &TranslateRequest {
                    q: text,
                    target,
                    source,
                },
            )
            .await?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| ProviderError::InvalidResponse("no translations returned".to_string()))
    }

    async fn detect(&self, text: &str) -> Result<String, ProviderError> {
        let url = format!("{}/detect", self.endpoint);
        let body: Envelope<Detections> = self.post(&url, &DetectRequest { q: text }).await?;

        body.data
            .detections
            .into_iter()
            .next()
            .and_then(|candidates| candidates.into_iter().next())
            .map(|d| d.language)
            .ok_or_else(|| ProviderError::InvalidResponse("no detections returned".to_string()))
    }
}
