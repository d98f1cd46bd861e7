//! # codepace Advisor
//!
//! The pure pieces behind the suggestion endpoint:
//!
//! - [`TemplateRegistry`] / [`fill_template`] - closed registry of prompt templates
//!   and `{{placeholder}}` substitution
//! - [`PerformanceEvaluator`] - time-vs-benchmark ratio, banding and per-topic history
//! - [`parse_reply`] - best-effort decoder for "Key: Value" model replies

pub mod evaluator;
pub mod parser;
pub mod prompt;

pub use evaluator::{classify, Evaluation, PerformanceBand, PerformanceEvaluator};
pub use parser::{parse_reply, ParsedReply, SUGGESTION_FIELDS};
pub use prompt::{
    fill_template, params_from_json, PromptParams, TemplateRegistry, EXPERT_CODING_MENTOR,
    NEXT_PROBLEM,
};
