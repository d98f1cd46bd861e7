//! Process-wide fixed-window request limiter.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::ApiError;

pub const LIMIT_HEADER: &str = "x-ratelimit-limit";
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

struct Window {
    started: Instant,
    count: u64,
}

/// Allows `max_requests` per `window`; the counter resets when a window ends.
pub struct FixedWindowLimiter {
    window: Duration,
    max_requests: u64,
    state: Mutex<Window>,
}

impl FixedWindowLimiter {
    pub fn new(window: Duration, max_requests: u64) -> Self {
        Self {
            window,
            max_requests,
            state: Mutex::new(Window {
                started: Instant::now(),
                count: 0,
            }),
        }
    }

    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    /// Count one request made at `now`. Returns `false` when over the limit.
    pub fn try_acquire_at(&self, now: Instant) -> bool {
        let mut state = self.state.lock();
        if now.saturating_duration_since(state.started) >= self.window {
            state.started = now;
            state.count = 0;
        }

        if state.count < self.max_requests {
            state.count += 1;
            true
        } else {
            false
        }
    }

    /// Requests still allowed in the current window.
    pub fn remaining(&self) -> u64 {
        let state = self.state.lock();
        self.max_requests.saturating_sub(state.count)
    }
}

/// Middleware rejecting requests over the limit with 429.
///
/// Every response carries `x-ratelimit-limit` and `x-ratelimit-remaining`.
pub async fn enforce(
    State(limiter): State<Arc<FixedWindowLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = if limiter.try_acquire() {
        next.run(request).await
    } else {
        debug!("Rate limit hit for {}", request.uri().path());
        ApiError::RateLimited.into_response()
    };

    let headers = response.headers_mut();
    headers.insert(LIMIT_HEADER, HeaderValue::from(limiter.max_requests));
    headers.insert(REMAINING_HEADER, HeaderValue::from(limiter.remaining()));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max() {
        let limiter = FixedWindowLimiter::new(Duration::from_secs(60), 3);
        let now = Instant::now();
        assert!(limiter.try_acquire_at(now));
        assert!(limiter.try_acquire_at(now));
        assert!(limiter.try_acquire_at(now));
        assert!(!limiter.try_acquire_at(now));
        assert_eq!(limiter.remaining(), 0);
    }

    #[test]
    fn test_window_resets() {
        let limiter = FixedWindowLimiter::new(Duration::from_secs(60), 1);
        let now = Instant::now();
        assert!(limiter.try_acquire_at(now));
        assert!(!limiter.try_acquire_at(now + Duration::from_secs(59)));
        assert!(limiter.try_acquire_at(now + Duration::from_secs(61)));
    }

    #[test]
    fn test_zero_limit_rejects_everything() {
        let limiter = FixedWindowLimiter::new(Duration::from_secs(60), 0);
        assert!(!limiter.try_acquire());
    }
}
