//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use codepace_protocols::{ErrorBody, PromptError, ProviderError};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Every way a request can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request body or parameters.
    #[error("{0}")]
    Validation(String),

    /// Server-side misconfiguration. Never shown to the caller.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request timeout")]
    UpstreamTimeout,

    /// Non-success reply from the model API, passed through.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Model API answered but the payload was unusable.
    #[error("Invalid response from model API: {0}")]
    BadGateway(String),

    #[error("Too many requests, please try again later.")]
    RateLimited,

    #[error("Route not found")]
    NotFound,

    /// Anything unexpected. Never shown to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message safe to return to the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::Configuration(_) | Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
            Self::BadGateway(_) => "Invalid response from model API".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<PromptError> for ApiError {
    fn from(err: PromptError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey => Self::Configuration(err.to_string()),
            ProviderError::Timeout(_) => Self::UpstreamTimeout,
            ProviderError::ApiError { status, message } => Self::Upstream { status, message },
            ProviderError::InvalidResponse(msg) => Self::BadGateway(msg),
            ProviderError::Network(msg) => Self::Internal(format!("Network error: {}", msg)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Error processing request: {}", self);
        } else if status != StatusCode::NOT_FOUND {
            warn!("Rejected request ({}): {}", status.as_u16(), self);
        }

        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
