//! Companion (timer + page watcher) configuration.

use serde::{Deserialize, Serialize};

/// Settings for the page-side companion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Suggestion endpoint the companion posts completions to.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Prefix joined with a suggestion's URL slug.
    #[serde(default = "default_problem_base_url")]
    pub problem_base_url: String,

    /// Text whose presence in a success element marks the problem solved.
    #[serde(default = "default_completion_marker")]
    pub completion_marker: String,

    /// CSS selector for elements that may carry the completion marker.
    #[serde(default = "default_success_selector")]
    pub success_selector: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            problem_base_url: default_problem_base_url(),
            completion_marker: default_completion_marker(),
            success_selector: default_success_selector(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_endpoint_url() -> String {
    "http://localhost:3000/api/next-problem".to_string()
}

fn default_problem_base_url() -> String {
    "https://leetcode.com/problems/".to_string()
}

fn default_completion_marker() -> String {
    "Accepted".to_string()
}

fn default_success_selector() -> String {
    r#"[class*="success"]"#.to_string()
}

fn default_request_timeout() -> u64 {
    30
}
