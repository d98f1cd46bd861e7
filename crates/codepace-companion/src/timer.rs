//! Problem timer service.
//!
//! The timer is an explicit state machine (`Idle`, `Running`, `Stopped`)
//! whose state is owned by [`TimerService`]. Every mutating transition writes
//! the full state to the durable store before replying, so a restarted process
//! can pick up a running timer where it left off.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use codepace_protocols::store::{get_json, set_json};
use codepace_protocols::{
    keys, EpochMillis, KeyValueStore, TimerPhase, TimerRequest, TimerResponse, TimerState,
};

use crate::clock::Clock;
use crate::error::CompanionError;

pub const STATUS_STARTED: &str = "Timer started";
pub const STATUS_STOPPED: &str = "Timer stopped";
pub const STATUS_RESET: &str = "Timer reset";

/// Timer state as written under `timerState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTimerState {
    #[serde(flatten)]
    pub state: TimerState,

    /// When the record was written. Older records lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<EpochMillis>,
}

/// Owner of the timer state. Transitions are serialized behind an async mutex.
pub struct TimerService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    state: Mutex<TimerState>,
}

impl TimerService {
    /// Create a service in the `Idle` state. Call [`rehydrate`](Self::rehydrate)
    /// to pick up a persisted timer.
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            state: Mutex::new(TimerState::idle()),
        }
    }

    /// Clear any persisted state and go idle.
    pub async fn install(&self) -> Result<(), CompanionError> {
        let mut state = self.state.lock().await;
        self.store
            .set(keys::TIMER_STATE, serde_json::Value::Null)
            .await?;
        *state = TimerState::idle();
        info!("Timer state cleared");
        Ok(())
    }

    /// Restore the in-memory state from the store.
    ///
    /// A running timer resumes with the time that passed while the process was
    /// down counted in.
    pub async fn rehydrate(&self) -> Result<TimerState, CompanionError> {
        let mut state = self.state.lock().await;
        let persisted: Option<PersistedTimerState> =
            get_json(self.store.as_ref(), keys::TIMER_STATE).await?;
        let now = self.clock.now_millis();

        let restored = match persisted {
            None => TimerState::idle(),
            Some(p) if p.state.is_running => {
                let offline = p.saved_at.map(|t| now.saturating_sub(t).max(0)).unwrap_or(0);
                let elapsed = p.state.elapsed as i64 + offline;
                TimerState {
                    is_running: true,
                    start_time: Some(now - elapsed),
                    elapsed: 0,
                }
            }
            Some(p) => p.state,
        };

        debug!("Rehydrated timer: {:?}", restored.phase());
        *state = restored;
        Ok(restored)
    }

    /// `Idle | Stopped | Running -> Running` with a fresh interval.
    pub async fn start(&self) -> Result<TimerResponse, CompanionError> {
        let mut state = self.state.lock().await;
        let now = self.clock.now_millis();
        let next = TimerState::running(now);

        self.persist(next, now).await?;
        *state = next;
        info!("Timer started");
        Ok(TimerResponse::with_status(STATUS_STARTED, next))
    }

    /// `Running -> Stopped`, fixing the elapsed time. A no-op otherwise.
    pub async fn stop(&self) -> Result<TimerResponse, CompanionError> {
        let mut state = self.state.lock().await;
        if state.phase() != TimerPhase::Running {
            return Ok(TimerResponse::state_only(*state));
        }

        let now = self.clock.now_millis();
        let next = TimerState::stopped(state.elapsed_at(now));

        self.persist(next, now).await?;
        *state = next;
        info!("Timer stopped after {} ms", next.elapsed);
        Ok(TimerResponse::with_status(STATUS_STOPPED, next))
    }

    /// Any state -> `Idle`.
    pub async fn reset(&self) -> Result<TimerResponse, CompanionError> {
        let mut state = self.state.lock().await;
        let next = TimerState::idle();

        self.persist(next, self.clock.now_millis()).await?;
        *state = next;
        info!("Timer reset");
        Ok(TimerResponse::with_status(STATUS_RESET, next))
    }

    /// Current state with `elapsed` computed live while running. Never mutates.
    pub async fn query(&self) -> TimerState {
        let state = *self.state.lock().await;
        if state.phase() == TimerPhase::Running {
            TimerState {
                elapsed: state.elapsed_at(self.clock.now_millis()),
                ..state
            }
        } else {
            state
        }
    }

    /// Dispatch one protocol message.
    pub async fn handle(&self, request: TimerRequest) -> Result<TimerResponse, CompanionError> {
        match request {
            TimerRequest::StartTimer => self.start().await,
            TimerRequest::StopTimer => self.stop().await,
            TimerRequest::ResetTimer => self.reset().await,
            TimerRequest::GetTimerState => Ok(TimerResponse::state_only(self.query().await)),
        }
    }

    async fn persist(&self, state: TimerState, now: EpochMillis) -> Result<(), CompanionError> {
        let record = PersistedTimerState {
            state,
            saved_at: Some(now),
        };
        set_json(self.store.as_ref(), keys::TIMER_STATE, &record).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
