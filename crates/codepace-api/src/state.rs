//! Shared application state.

use std::sync::Arc;

use codepace_advisor::{PerformanceEvaluator, TemplateRegistry};
use codepace_protocols::ModelClient;

use crate::rate_limit::FixedWindowLimiter;

/// State shared by every handler. Everything here is either immutable or
/// internally synchronized.
pub struct AppState {
    pub registry: TemplateRegistry,
    pub model: Arc<dyn ModelClient>,
    pub evaluator: PerformanceEvaluator,
    /// Prefix joined with a suggestion's URL slug.
    pub problem_base_url: String,
    pub limiter: Option<Arc<FixedWindowLimiter>>,
}

impl AppState {
    pub fn new(registry: TemplateRegistry, model: Arc<dyn ModelClient>) -> Self {
        Self {
            registry,
            model,
            evaluator: PerformanceEvaluator::new(),
            problem_base_url: "https://leetcode.com/problems/".to_string(),
            limiter: None,
        }
    }

    pub fn with_problem_base_url(mut self, url: impl Into<String>) -> Self {
        self.problem_base_url = url.into();
        self
    }

    pub fn with_rate_limit(mut self, limiter: FixedWindowLimiter) -> Self {
        self.limiter = Some(Arc::new(limiter));
        self
    }
}
