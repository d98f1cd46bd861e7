//! Companion command handlers: watch, complete, journey.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use codepace_companion::{
    Clock, Companion, CompletionDetector, CompletionSession, PageWatcher, ProblemPage,
    SuggestionClient, SystemClock,
};
use codepace_config::Config;
use codepace_protocols::ProblemSuggestion;

use crate::cmd_timer::open_timer;
use crate::CliResult;

async fn build_companion(
    config: &Config,
) -> Result<Companion, Box<dyn std::error::Error + Send + Sync>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let (store, timer) = open_timer(config, clock.clone()).await?;
    let client = SuggestionClient::new(
        config.companion.endpoint_url.clone(),
        Duration::from_secs(config.companion.request_timeout_seconds),
    )?;
    Ok(Companion::new(store, timer, client, clock))
}

fn print_suggestion(problem: &ProblemSuggestion) {
    println!("Next problem: {}", problem.title);
    println!("  Difficulty: {}", problem.difficulty);
    println!("  Topic:      {}", problem.topic);
    println!("  Focus Area: {}", problem.focus_area);
    if !problem.url.is_empty() {
        println!("  {}", problem.url);
    }
}

/// Handle `codepace watch <page> --url <url>`.
pub(crate) async fn watch_page(config: &Config, page: PathBuf, url: String) -> CliResult {
    let companion = build_companion(config).await?;

    let html = tokio::fs::read_to_string(&page).await?;
    let details = ProblemPage::new()?.extract_details(&html, &url);
    if companion.on_page_load(&details).await?.is_some() {
        println!("Timer started for '{}'", details.title);
    }

    let detector = CompletionDetector::new(
        &config.companion.success_selector,
        config.companion.completion_marker.clone(),
    )?;
    let mut session = CompletionSession::new(detector);
    let mutations = PageWatcher::new(&page)?.into_mutations();

    info!("Waiting for '{}' on {}", config.companion.completion_marker, page.display());
    let completed = tokio::select! {
        batch = session.observe(mutations) => batch,
        _ = tokio::signal::ctrl_c() => None,
    };

    if completed.is_none() {
        println!("Stopped watching before the problem was solved");
        return Ok(());
    }

    match companion.on_completion(&details).await {
        Some(problem) => print_suggestion(&problem),
        None => println!("Problem completed, but no suggestion was received (see logs)"),
    }
    Ok(())
}

/// Handle `codepace complete`.
pub(crate) async fn complete(config: &Config) -> CliResult {
    let companion = build_companion(config).await?;
    let problem = companion.complete_current().await?;
    println!("Problem completed!");
    print_suggestion(&problem);
    Ok(())
}

/// Handle `codepace journey`.
pub(crate) async fn journey(config: &Config) -> CliResult {
    let companion = build_companion(config).await?;
    let problem = companion.start_journey().await?;
    print_suggestion(&problem);
    Ok(())
}

/// Handle `codepace next`.
pub(crate) async fn go_to_next(config: &Config) -> CliResult {
    let companion = build_companion(config).await?;
    let details = companion.go_to_next().await?;
    println!("Timer started for '{}'", details.title);
    if !details.url.is_empty() {
        println!("  {}", details.url);
    }
    Ok(())
}
