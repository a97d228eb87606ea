use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderError, TranslationProvider};

/// One LibreTranslate instance.
pub struct LibreTranslateProvider {
    client: Client,
    instance: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

#[derive(Deserialize)]
struct Detection {
    language: String,
}

impl LibreTranslateProvider {
    pub fn new(instance: impl Into<String>) -> Self {
        Self::with_client(Client::new(), instance)
    }

    pub fn with_client(client: Client, instance: impl Into<String>) -> Self {
        Self {
            client,
            instance: instance.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(format!("{}/{}", self.instance, path))
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

        Ok(response)
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn name(&self) -> &str {
        &self.instance
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        tracing::debug!(
            instance = %self.instance,
            from = source,
            to = target,
            "Requesting LibreTranslate"
        );

        let response = self
            .post(
                "translate",
                &TranslateRequest {
                    q: text,
                    source,
                    target,
                },
            )
            .await?;

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(body.translated_text)
    }

    async fn detect(&self, text: &str) -> Result<String, ProviderError> {
        let response = self.post("detect", &DetectRequest { q: text }).await?;

        let detections: Vec<Detection> = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        detections
            .into_iter()
            .next()
            .map(|d| d.language)
            .ok_or_else(|| ProviderError::InvalidResponse("empty detection list".to_string()))
    }
}
