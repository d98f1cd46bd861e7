//! Gemini model client implementation.

use async_trait::async_trait;
use tracing::debug;

use codepace_protocols::{ModelClient, ProviderError};

use crate::client::{GeminiClient, GeminiClientConfig};
use crate::types::*;

/// Gemini-backed [`ModelClient`]. One prompt, one `generateContent` call, no retries.
pub struct GeminiProvider {
    client: GeminiClient,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(config: GeminiClientConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: GeminiClient::new(&config)?,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelClient for GeminiProvider {
    fn id(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.client.has_api_key()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.client.generate_content(&self.model, &request).await?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Gemini usage: prompt={} completion={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        response
            .first_text()
            .ok_or_else(|| ProviderError::InvalidResponse("No content in response".to_string()))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
