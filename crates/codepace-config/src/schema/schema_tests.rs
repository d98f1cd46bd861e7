use super::*;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.gemini.model, "gemini-pro");
    assert!(config.gemini.base_url.starts_with("https://"));
    assert!(config.rate_limit.enabled);
    assert_eq!(config.rate_limit.window_seconds, 900);
    assert_eq!(config.companion.completion_marker, "Accepted");
    assert!(config.templates.is_empty());
}

#[test]
fn test_explicit_api_key_wins() {
    let config = GeminiConfig {
        api_key: Some("from-file".to_string()),
        ..Default::default()
    };
    assert_eq!(config.resolved_api_key().as_deref(), Some("from-file"));
}

#[test]
fn test_blank_api_key_is_unset() {
    let config = GeminiConfig {
        api_key: Some("   ".to_string()),
        ..Default::default()
    };
    // Falls through to the environment, which may or may not be set on the host.
    assert_ne!(config.resolved_api_key().as_deref(), Some("   "));
}

#[test]
fn test_storage_path_expands_tilde() {
    let config = StorageConfig {
        path: Some("~/codepace-store.json".into()),
    };
    let resolved = config.resolved_path();
    assert!(!resolved.to_string_lossy().starts_with('~'));
    assert!(resolved.ends_with("codepace-store.json"));
}

#[test]
fn test_storage_default_path() {
    let resolved = StorageConfig::default().resolved_path();
    assert!(resolved.ends_with(".codepace/storage.json"));
}

#[test]
fn test_config_serialization_skips_missing_key() {
    let config = Config::default();
    let toml = toml::to_string(&config).unwrap();
    assert!(!toml.contains("api_key"));
}
