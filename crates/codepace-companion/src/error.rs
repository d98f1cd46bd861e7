//! Companion errors.

use thiserror::Error;

use codepace_protocols::StoreError;

#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Endpoint returned {status}: {message}")]
    Endpoint { status: u16, message: String },

    #[error("Watch error: {0}")]
    Watch(String),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("No current problem found")]
    NoCurrentProblem,

    #[error("No suggested problem stored")]
    NoNextProblem,

    #[error("Timer is not running")]
    TimerNotRunning,
}

impl From<reqwest::Error> for CompanionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<notify::Error> for CompanionError {
    fn from(err: notify::Error) -> Self {
        Self::Watch(err.to_string())
    }
}
