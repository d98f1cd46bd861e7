//! codepace - problem timer and next-problem advisor.
//!
//! Main entry point for the codepace CLI and server.

mod cli;
mod cmd_companion;
mod cmd_timer;
mod server;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use codepace_config::{codepace_dir, Config, ConfigLoader};

use crate::cli::{Cli, Commands};

pub(crate) type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn default_config_path() -> PathBuf {
    codepace_dir().join("config.toml")
}

/// Load the config file. A missing default file means defaults; a missing
/// explicit file is an error.
fn load_config(path: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let config = match path {
        Some(path) => {
            let path = PathBuf::from(ConfigLoader::expand_path(&path.to_string_lossy()));
            info!("Loading config from {}", path.display());
            ConfigLoader::load(&path)?
        }
        None => ConfigLoader::load_or_default(&default_config_path())?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> CliResult {
    server::init_tracing()?;

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    match cli.command {
        None => server::run_server(config, None, None).await,
        Some(Commands::Serve { host, port }) => server::run_server(config, host, port).await,
        Some(Commands::Timer { action }) => cmd_timer::handle_timer_command(&config, action).await,
        Some(Commands::Watch { page, url }) => {
            cmd_companion::watch_page(&config, page, url).await
        }
        Some(Commands::Complete) => cmd_companion::complete(&config).await,
        Some(Commands::Journey) => cmd_companion::journey(&config).await,
        Some(Commands::Next) => cmd_companion::go_to_next(&config).await,
    }
}
