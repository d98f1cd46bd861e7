//! Problem metadata and suggestions.

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Topic used when a page lists no topics.
pub const DEFAULT_TOPIC: &str = "general";

/// Snapshot of the problem a user is working on, scraped once per page load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(default)]
    pub title: String,

    /// Absent when the page carried no recognizable difficulty.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub url: String,
}

impl ProblemDetails {
    /// First listed topic, or `"general"`.
    pub fn primary_topic(&self) -> &str {
        self.topics
            .first()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TOPIC)
    }
}

/// Next problem proposed by the model. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSuggestion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub focus_area: String,
    #[serde(default)]
    pub url_slug: String,
    #[serde(default)]
    pub url: String,
}
