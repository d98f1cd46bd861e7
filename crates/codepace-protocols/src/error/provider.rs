//! Model provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Model API key is not configured")]
    MissingApiKey,

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from model API: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}

impl ProviderError {
    /// Build an API error from a non-success status and the best message found in the body.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Error from model API".to_string()
        } else {
            message
        };
        Self::ApiError { status, message }
    }

    /// Whether the error was caused by the bounded request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
