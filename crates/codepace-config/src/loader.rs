//! Configuration loader.
//!
//! `${VAR}` references are resolved inside string values only, after the TOML
//! has been parsed, so comments never need the variable to exist. Prompt text
//! under `[templates]` is taken literally.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use toml::{Table, Value};

use crate::error::ConfigError;
use crate::schema::Config;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Table whose strings are never expanded.
const LITERAL_TABLE: &str = "templates";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::load_str(&fs::read_to_string(path)?)
    }

    /// Like [`load`](Self::load), but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let mut table: Table = content.parse()?;
        for (key, value) in table.iter_mut() {
            if key != LITERAL_TABLE {
                expand_value(value, key)?;
            }
        }
        let config: Config = Value::Table(table).try_into()?;
        Ok(config)
    }

    /// Replace every `${VAR}` in `text` with the variable's value.
    /// `key` only names the setting in the error.
    pub fn expand_env_vars(text: &str, key: &str) -> Result<String, ConfigError> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in ENV_VAR.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = std::env::var(name.as_str()).map_err(|_| ConfigError::EnvVarNotSet {
                name: name.as_str().to_string(),
                key: key.to_string(),
            })?;
            out.push_str(&text[last..whole.start()]);
            out.push_str(&value);
            last = whole.end();
        }

        out.push_str(&text[last..]);
        Ok(out)
    }

    /// Expand shell-style paths (e.g., `~/.codepace`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

fn expand_value(value: &mut Value, key: &str) -> Result<(), ConfigError> {
    match value {
        Value::String(s) => *s = ConfigLoader::expand_env_vars(s, key)?,
        Value::Array(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                expand_value(item, &format!("{key}[{i}]"))?;
            }
        }
        Value::Table(table) => {
            for (name, item) in table.iter_mut() {
                expand_value(item, &format!("{key}.{name}"))?;
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
