//! CLI definitions for codepace.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// codepace CLI.
#[derive(Parser)]
#[command(name = "codepace")]
#[command(about = "Problem timer and next-problem advisor for coding practice")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.codepace/config.toml)
    #[arg(short, long, global = true, env = "CODEPACE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the suggestion server in foreground (default)
    Serve {
        /// Server host (overrides [server].host)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides [server].port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Control the problem timer
    Timer {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// Watch a saved problem page and fetch the next problem once it is solved
    Watch {
        /// Saved HTML of the problem page
        page: PathBuf,

        /// Address the page was saved from
        #[arg(long, default_value = "")]
        url: String,
    },

    /// Mark the current problem complete and fetch the next one
    Complete,

    /// Fetch the first problem of a new journey
    Journey,

    /// Move on to the suggested problem and start timing it
    Next,
}

#[derive(Subcommand, Clone, Copy)]
pub(crate) enum TimerAction {
    /// Start a fresh interval
    Start,

    /// Stop the running timer
    Stop,

    /// Show the current elapsed time
    Status,

    /// Go back to idle
    Reset,

    /// Clear any persisted timer state
    Install,
}
