//! Page-load and completion handling.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use codepace_protocols::store::{get_json, set_json};
use codepace_protocols::{
    keys, Difficulty, EpochMillis, KeyValueStore, NextProblemRequest, ProblemDetails,
    ProblemSuggestion, TimerResponse,
};

use crate::client::SuggestionClient;
use crate::clock::Clock;
use crate::error::CompanionError;
use crate::timer::TimerService;

/// A page load within this many milliseconds of a completion does not restart the timer.
pub const RESTART_GUARD_MS: i64 = 1_000;

/// Topic of the first request of a new journey.
pub const JOURNEY_TOPIC: &str = "arrays";

/// Ties the timer, the store and the suggestion endpoint together.
pub struct Companion {
    store: Arc<dyn KeyValueStore>,
    timer: Arc<TimerService>,
    client: SuggestionClient,
    clock: Arc<dyn Clock>,
}

impl Companion {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        timer: Arc<TimerService>,
        client: SuggestionClient,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            timer,
            client,
            clock,
        }
    }

    pub fn timer(&self) -> &Arc<TimerService> {
        &self.timer
    }

    /// Record the problem and start timing it, unless a completion was just
    /// recorded (the page reloading after a solve).
    pub async fn on_page_load(
        &self,
        details: &ProblemDetails,
    ) -> Result<Option<TimerResponse>, CompanionError> {
        set_json(self.store.as_ref(), keys::CURRENT_PROBLEM, details).await?;

        let last_completion: EpochMillis =
            get_json(self.store.as_ref(), keys::LAST_COMPLETION_TIME)
                .await?
                .unwrap_or(0);

        if self.clock.now_millis() - last_completion > RESTART_GUARD_MS {
            info!("Tracking problem '{}'", details.title);
            Ok(Some(self.timer.start().await?))
        } else {
            Ok(None)
        }
    }

    /// Stop the timer and ask for the next problem.
    ///
    /// Failures are logged and swallowed; the caller only learns whether a
    /// suggestion was stored.
    pub async fn on_completion(&self, details: &ProblemDetails) -> Option<ProblemSuggestion> {
        match self.try_complete(details).await {
            Ok(suggestion) => Some(suggestion),
            Err(CompanionError::TimerNotRunning) => None,
            Err(e) => {
                error!("Error sending completion data: {}", e);
                None
            }
        }
    }

    /// Complete the problem recorded by the last page load.
    pub async fn complete_current(&self) -> Result<ProblemSuggestion, CompanionError> {
        let details: ProblemDetails = get_json(self.store.as_ref(), keys::CURRENT_PROBLEM)
            .await?
            .ok_or(CompanionError::NoCurrentProblem)?;
        self.try_complete(&details).await
    }

    /// First request of a new user: an easy problem on arrays.
    pub async fn start_journey(&self) -> Result<ProblemSuggestion, CompanionError> {
        let request = NextProblemRequest {
            last_problem: String::new(),
            difficulty: Difficulty::Easy.to_string(),
            time_taken: 0,
            topic: JOURNEY_TOPIC.to_string(),
        };

        let suggestion = self.client.next_problem(&request).await?;
        self.store
            .set_many(vec![
                (keys::FIRST_TIME.to_string(), Value::Bool(true)),
                (keys::NEXT_PROBLEM.to_string(), json!(suggestion)),
            ])
            .await?;
        info!("Journey started with '{}'", suggestion.title);
        Ok(suggestion)
    }

    /// The stored suggestion, if any.
    pub async fn next_problem(&self) -> Result<Option<ProblemSuggestion>, CompanionError> {
        Ok(get_json(self.store.as_ref(), keys::NEXT_PROBLEM).await?)
    }

    /// Move on to the stored suggestion: it becomes the current problem and
    /// a fresh timer session starts.
    pub async fn go_to_next(&self) -> Result<ProblemDetails, CompanionError> {
        let suggestion = self
            .next_problem()
            .await?
            .ok_or(CompanionError::NoNextProblem)?;

        let details = ProblemDetails {
            title: suggestion.title,
            difficulty: suggestion.difficulty.parse().ok(),
            topics: if suggestion.topic.is_empty() {
                Vec::new()
            } else {
                vec![suggestion.topic]
            },
            url: suggestion.url,
        };

        set_json(self.store.as_ref(), keys::CURRENT_PROBLEM, &details).await?;
        self.timer.start().await?;
        info!("Moved on to '{}'", details.title);
        Ok(details)
    }

    async fn try_complete(
        &self,
        details: &ProblemDetails,
    ) -> Result<ProblemSuggestion, CompanionError> {
        let reply = self.timer.stop().await?;
        if reply.status.is_none() {
            warn!("Completion of '{}' ignored: timer was not running", details.title);
            return Err(CompanionError::TimerNotRunning);
        }

        let request = NextProblemRequest {
            last_problem: details.title.clone(),
            difficulty: details
                .difficulty
                .map(|d| d.to_string())
                .unwrap_or_default(),
            time_taken: reply.timer_state.elapsed_minutes(),
            topic: details.primary_topic().to_string(),
        };

        debug!(
            "Posting completion of '{}' to {}",
            details.title,
            self.client.endpoint_url()
        );
        let suggestion = self.client.next_problem(&request).await?;
        self.store
            .set_many(vec![
                (keys::NEXT_PROBLEM.to_string(), json!(suggestion)),
                (keys::LAST_COMPLETION_TIME.to_string(), json!(self.clock.now_millis())),
            ])
            .await?;

        info!(
            "Completed '{}' in {} min, next: '{}'",
            details.title, request.time_taken, suggestion.title
        );
        Ok(suggestion)
    }
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
