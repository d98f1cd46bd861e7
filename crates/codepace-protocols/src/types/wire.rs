//! Request and response bodies of the suggestion endpoint.

use serde::{Deserialize, Serialize};

use super::ProblemSuggestion;

/// Body of `POST /api/next-problem` as sent by the companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextProblemRequest {
    pub last_problem: String,
    pub difficulty: String,
    /// Whole minutes spent on the last problem.
    pub time_taken: u64,
    pub topic: String,
}

/// Performance verdict included in a successful suggestion reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub topic: String,
    /// Ratio rendered with two decimals.
    pub ratio: String,
    pub message: String,
}

/// Reply of `POST /api/next-problem`, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextProblemResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub problem: Option<ProblemSuggestion>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub performance: Option<PerformanceSummary>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl NextProblemResponse {
    pub fn ok(problem: ProblemSuggestion, performance: PerformanceSummary) -> Self {
        Self {
            success: true,
            problem: Some(problem),
            performance: Some(performance),
            error: None,
        }
    }
}

/// Generic failure body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
