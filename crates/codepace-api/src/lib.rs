//! # codepace API
//!
//! HTTP front of the advisor. Each suggestion request runs
//! `validate -> build prompt -> evaluate -> call model -> parse -> respond`
//! with exactly one model call and no retries.
//!
//! ## Routes
//!
//! ```text
//! POST /api/next-problem  - next problem from time taken and difficulty
//! POST /api/ask-gemini    - render any registered template and return the raw reply
//! GET  /health            - liveness
//! ```

pub mod error;
pub mod http;
pub mod rate_limit;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::create_router;
pub use rate_limit::FixedWindowLimiter;
pub use server::{ApiServer, ServerAddress};
pub use state::AppState;
