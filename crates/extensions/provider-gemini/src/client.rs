//! Gemini API client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use codepace_protocols::ProviderError;

use crate::types::*;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
const DEFAULT_MODEL: &str = "gemini-pro";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Whole-request timeout.
    pub timeout_seconds: u64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiClientConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout_seconds: u64,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: &GeminiClientConfig) -> Result<Self, ProviderError> {
        let connect = CONNECT_TIMEOUT_SECS.min(config.timeout_seconds.max(1));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<GeminiError>(&body) {
                Ok(e) => e.error.message,
                Err(_) => body,
            };
            return Err(ProviderError::from_status(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.timeout_seconds)
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
