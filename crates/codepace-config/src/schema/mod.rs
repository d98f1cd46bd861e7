//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod schema_companion;
mod schema_infra;

pub use schema_companion::*;
pub use schema_infra::*;

/// Shared default helper used by submodules.
pub(crate) fn default_true() -> bool {
    true
}

/// Environment variable consulted when `gemini.api_key` is not set.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub companion: CompanionConfig,

    /// Extra or overriding prompt templates, keyed by template ID.
    #[serde(default)]
    pub templates: HashMap<String, String>,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Gemini model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Hard timeout for the single model call.
    #[serde(default = "default_gemini_timeout")]
    pub timeout_seconds: u64,
}

impl GeminiConfig {
    /// Configured key, falling back to `GEMINI_API_KEY`. Blank values count as unset.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(GEMINI_API_KEY_ENV)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            timeout_seconds: default_gemini_timeout(),
        }
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1".to_string()
}

fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}

fn default_gemini_timeout() -> u64 {
    15
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
