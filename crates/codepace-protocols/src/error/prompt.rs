//! Prompt building errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Missing required parameters: {0}")]
    MissingParameter(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = PromptError::MissingParameter("time".to_string());
        assert!(err.to_string().starts_with("Missing required parameters"));
        assert!(err.to_string().contains("time"));
    }

    #[test]
    fn test_unknown_template_message() {
        let err = PromptError::UnknownTemplate("nope".to_string());
        assert_eq!(err.to_string(), "Unknown template: nope");
    }
}
