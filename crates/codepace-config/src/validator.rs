//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_gemini(config, &mut result);
        Self::validate_rate_limit(config, &mut result);
        Self::validate_companion(config, &mut result);
        Self::validate_templates(config, &mut result);

        Ok(result)
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_gemini(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.gemini.base_url) {
            result.add_error(ValidationError::new(
                "gemini.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if config.gemini.model.trim().is_empty() {
            result.add_error(ValidationError::new("gemini.model", "model cannot be empty"));
        }

        match config.gemini.timeout_seconds {
            0 => result.add_error(ValidationError::new(
                "gemini.timeout_seconds",
                "timeout_seconds must be greater than 0",
            )),
            t if t > 60 => result.add_warning(ValidationWarning::new(
                "gemini.timeout_seconds",
                "timeout_seconds is above 60, suggestion requests may hang for a long time",
            )),
            _ => {}
        }

        if config.gemini.resolved_api_key().is_none() {
            result.add_warning(ValidationWarning::new(
                "gemini.api_key",
                "No API key configured; model requests will fail until GEMINI_API_KEY is set",
            ));
        }
    }

    fn validate_rate_limit(config: &Config, result: &mut ValidationResult) {
        if !config.rate_limit.enabled {
            return;
        }
        if config.rate_limit.window_seconds == 0 {
            result.add_error(ValidationError::new(
                "rate_limit.window_seconds",
                "window_seconds must be greater than 0",
            ));
        }
        if config.rate_limit.max_requests == 0 {
            result.add_error(ValidationError::new(
                "rate_limit.max_requests",
                "max_requests must be greater than 0",
            ));
        }
    }

    fn validate_companion(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.companion.endpoint_url) {
            result.add_error(ValidationError::new(
                "companion.endpoint_url",
                "endpoint_url must start with http:// or https://",
            ));
        }

        if config.companion.completion_marker.is_empty() {
            result.add_error(ValidationError::new(
                "companion.completion_marker",
                "completion_marker cannot be empty",
            ));
        }

        if !config.companion.problem_base_url.ends_with('/') {
            result.add_warning(ValidationWarning::new(
                "companion.problem_base_url",
                "problem_base_url does not end with '/', suggestion links may be malformed",
            ));
        }
    }

    fn validate_templates(config: &Config, result: &mut ValidationResult) {
        for (id, text) in &config.templates {
            if id.trim().is_empty() {
                result.add_error(ValidationError::new("templates", "Template ID cannot be empty"));
            }
            if text.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("templates.{}", id),
                    "Template text cannot be empty",
                ));
            }
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
