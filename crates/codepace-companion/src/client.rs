//! HTTP client for the next-problem endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use codepace_protocols::{NextProblemRequest, NextProblemResponse, ProblemSuggestion};

use crate::error::CompanionError;

/// Posts completions to the suggestion endpoint.
pub struct SuggestionClient {
    client: Client,
    endpoint_url: String,
}

impl SuggestionClient {
    pub fn new(endpoint_url: impl Into<String>, timeout: Duration) -> Result<Self, CompanionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Request the next problem. Any reply without `success: true` is an error.
    pub async fn next_problem(
        &self,
        request: &NextProblemRequest,
    ) -> Result<ProblemSuggestion, CompanionError> {
        debug!(
            "Requesting next problem: topic={} difficulty={} time_taken={}",
            request.topic, request.difficulty, request.time_taken
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        let parsed: Option<NextProblemResponse> = serde_json::from_str(&body).ok();
        match parsed {
            Some(NextProblemResponse {
                success: true,
                problem: Some(problem),
                ..
            }) => Ok(problem),
            Some(reply) => Err(CompanionError::Endpoint {
                status,
                message: reply
                    .error
                    .unwrap_or_else(|| "Failed to get next problem".to_string()),
            }),
            None => Err(CompanionError::Endpoint {
                status,
                message: format!("Unreadable reply: {}", body),
            }),
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
