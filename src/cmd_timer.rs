//! Timer command handlers.

use std::sync::Arc;

use codepace_companion::{Clock, FileStore, SystemClock, TimerService};
use codepace_config::Config;
use codepace_protocols::{format_elapsed, TimerRequest, TimerResponse};

use crate::cli::TimerAction;
use crate::CliResult;

/// Timer service over the configured store, rehydrated from disk.
pub(crate) async fn open_timer(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> Result<(Arc<FileStore>, Arc<TimerService>), Box<dyn std::error::Error + Send + Sync>> {
    let store = Arc::new(FileStore::new(config.storage.resolved_path()));
    let timer = Arc::new(TimerService::new(store.clone(), clock));
    timer.rehydrate().await?;
    Ok((store, timer))
}

fn print_response(response: &TimerResponse) {
    let state = &response.timer_state;
    let phase = format!("{:?}", state.phase()).to_lowercase();
    match &response.status {
        Some(status) => println!("{} [{}] {}", status, phase, format_elapsed(state.elapsed)),
        None => println!("[{}] {}", phase, format_elapsed(state.elapsed)),
    }
}

/// Handle `codepace timer <action>`.
pub(crate) async fn handle_timer_command(config: &Config, action: TimerAction) -> CliResult {
    let (_, timer) = open_timer(config, Arc::new(SystemClock)).await?;

    let response = match action {
        TimerAction::Start => timer.handle(TimerRequest::StartTimer).await?,
        TimerAction::Stop => timer.handle(TimerRequest::StopTimer).await?,
        TimerAction::Status => timer.handle(TimerRequest::GetTimerState).await?,
        TimerAction::Reset => timer.handle(TimerRequest::ResetTimer).await?,
        TimerAction::Install => {
            timer.install().await?;
            println!("Timer state cleared");
            return Ok(());
        }
    };

    print_response(&response);
    Ok(())
}
