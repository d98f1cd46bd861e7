//! HTTP route definitions.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::rate_limit;
use crate::state::AppState;

/// Build the application router.
///
/// ```text
/// POST /api/next-problem
/// POST /api/ask-gemini
/// GET  /health
/// *    -> 404 "Route not found"
/// ```
///
/// When the state carries a limiter, every route (the fallback included)
/// counts against it.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/next-problem", post(handlers::next_problem))
        .route("/ask-gemini", post(handlers::ask_gemini));

    let limiter = state.limiter.clone();

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state);

    if let Some(limiter) = limiter {
        router = router.layer(middleware::from_fn_with_state(limiter, rate_limit::enforce));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
