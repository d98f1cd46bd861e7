//! Tracing setup and server bootstrap.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codepace_advisor::TemplateRegistry;
use codepace_api::{ApiServer, AppState, FixedWindowLimiter, ServerAddress};
use codepace_config::{codepace_dir, Config, ConfigValidator};
use codepace_protocols::ModelClient;
use codepace_provider_gemini::{GeminiClientConfig, GeminiProvider};

use crate::CliResult;

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.codepace/logs/ with daily rotation.
pub(crate) fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let log_dir = codepace_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("codepace")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The worker flushes until the guard drops, so keep it for the process lifetime.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Log validation findings. Errors abort startup.
pub(crate) fn check_config(config: &Config) -> CliResult {
    let result = ConfigValidator::validate(config)?;
    for warning in &result.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    for err in &result.errors {
        error!("Config {}: {}", err.path, err.message);
    }

    if result.is_valid() {
        Ok(())
    } else {
        Err(format!("Invalid configuration ({} errors)", result.errors.len()).into())
    }
}

fn build_model(config: &Config) -> Result<Arc<dyn ModelClient>, Box<dyn std::error::Error + Send + Sync>> {
    let mut gemini = GeminiClientConfig::default()
        .with_base_url(config.gemini.base_url.clone())
        .with_model(config.gemini.model.clone())
        .with_timeout(config.gemini.timeout_seconds);
    if let Some(key) = config.gemini.resolved_api_key() {
        gemini = gemini.with_api_key(key);
    }

    let provider = GeminiProvider::new(gemini)?;
    if !provider.is_configured() {
        warn!("Gemini API key is not configured; suggestion requests will fail");
    }
    info!("Using model {}", provider.model());
    Ok(Arc::new(provider))
}

/// Run the suggestion server in foreground.
pub(crate) async fn run_server(config: Config, host: Option<String>, port: Option<u16>) -> CliResult {
    info!("Starting codepace v{}", env!("CARGO_PKG_VERSION"));
    check_config(&config)?;

    let registry = TemplateRegistry::with_overrides(&config.templates);
    info!("Loaded {} prompt templates: {}", registry.ids().len(), registry.ids().join(", "));

    let mut state = AppState::new(registry, build_model(&config)?)
        .with_problem_base_url(config.companion.problem_base_url.clone());
    if config.rate_limit.enabled {
        state = state.with_rate_limit(FixedWindowLimiter::new(
            Duration::from_secs(config.rate_limit.window_seconds),
            config.rate_limit.max_requests,
        ));
        info!(
            "Rate limit: {} requests per {} s",
            config.rate_limit.max_requests, config.rate_limit.window_seconds
        );
    }

    let address = ServerAddress::new(
        host.unwrap_or_else(|| config.server.host.clone()),
        port.unwrap_or(config.server.port),
    );
    ApiServer::new(address, Arc::new(state)).run().await
}
