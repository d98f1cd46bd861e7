//! Timer state and the companion message protocol.

use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// Observable timer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Stopped,
}

/// Timer state as stored and exchanged with callers.
///
/// `elapsed` is authoritative only while stopped; while running the true
/// elapsed time is `now - start_time`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub is_running: bool,
    pub start_time: Option<EpochMillis>,
    /// Elapsed milliseconds.
    pub elapsed: u64,
}

impl TimerState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn running(start_time: EpochMillis) -> Self {
        Self {
            is_running: true,
            start_time: Some(start_time),
            elapsed: 0,
        }
    }

    pub fn stopped(elapsed: u64) -> Self {
        Self {
            is_running: false,
            start_time: None,
            elapsed,
        }
    }

    /// A stopped timer with zero elapsed time is indistinguishable from idle.
    pub fn phase(&self) -> TimerPhase {
        if self.is_running && self.start_time.is_some() {
            TimerPhase::Running
        } else if self.elapsed > 0 {
            TimerPhase::Stopped
        } else {
            TimerPhase::Idle
        }
    }

    /// Elapsed milliseconds as of `now`, never negative.
    pub fn elapsed_at(&self, now: EpochMillis) -> u64 {
        match (self.is_running, self.start_time) {
            (true, Some(start)) => now.saturating_sub(start).max(0) as u64,
            _ => self.elapsed,
        }
    }

    /// Elapsed whole minutes (floor).
    pub fn elapsed_minutes(&self) -> u64 {
        self.elapsed / 60_000
    }
}

/// Request sent to the timer service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum TimerRequest {
    StartTimer,
    StopTimer,
    GetTimerState,
    ResetTimer,
}

/// Reply from the timer service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
    pub timer_state: TimerState,
}

impl TimerResponse {
    pub fn with_status(status: impl Into<String>, timer_state: TimerState) -> Self {
        Self {
            status: Some(status.into()),
            timer_state,
        }
    }

    pub fn state_only(timer_state: TimerState) -> Self {
        Self {
            status: None,
            timer_state,
        }
    }
}

/// Render milliseconds as `HH:MM:SS`.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_seconds = elapsed_ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
