//! Generative-language model client trait.

use async_trait::async_trait;

use crate::error::ProviderError;

/// A backend that turns a single prompt into a single text reply.
///
/// Implementations make exactly one upstream call per invocation and never retry.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Returns the client ID (e.g. "gemini").
    fn id(&self) -> &str;

    /// Whether a credential is available. Callers check this before building a prompt.
    fn is_configured(&self) -> bool {
        true
    }

    /// Send the prompt and return the reply text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
