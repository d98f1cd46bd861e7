//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Environment variable {name} (used by {key}) is not set")]
    EnvVarNotSet { name: String, key: String },

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_path() {
        let err = ConfigError::NotFound(PathBuf::from("/etc/codepace.toml"));
        assert_eq!(err.to_string(), "Config file not found: /etc/codepace.toml");
    }

    #[test]
    fn test_env_var_names_key() {
        let err = ConfigError::EnvVarNotSet {
            name: "GEMINI_KEY".to_string(),
            key: "gemini.api_key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Environment variable GEMINI_KEY (used by gemini.api_key) is not set"
        );
    }
}
