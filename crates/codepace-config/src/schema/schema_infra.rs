//! Transport and storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::default_true;

/// Fixed-window request limiter applied in front of every route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    #[serde(default = "default_max_requests")]
    pub max_requests: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_seconds: default_window_seconds(),
            max_requests: default_max_requests(),
        }
    }
}

fn default_window_seconds() -> u64 {
    15 * 60
}

fn default_max_requests() -> u64 {
    100
}

/// Durable key-value store location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the store. Defaults to `~/.codepace/storage.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string()),
            None => codepace_dir().join("storage.json"),
        }
    }
}

/// The `~/.codepace` directory (or `./.codepace` without a home directory).
pub fn codepace_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".codepace"))
        .unwrap_or_else(|| PathBuf::from(".codepace"))
}
