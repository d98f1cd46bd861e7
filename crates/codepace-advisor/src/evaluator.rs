//! Performance evaluation against fixed per-difficulty benchmarks.

use dashmap::DashMap;
use tracing::debug;

use codepace_protocols::{Difficulty, PerformanceSummary};

/// Ratios above this need more practice.
pub const NEEDS_PRACTICE_ABOVE: f64 = 1.5;

/// Ratios below this are proficient.
pub const PROFICIENT_BELOW: f64 = 0.7;

/// Classification of a time-to-benchmark ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    /// Reinforce at the same difficulty.
    NeedsPractice,
    OnTrack,
    /// Escalate difficulty or move to new concepts.
    Proficient,
}

impl PerformanceBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::NeedsPractice => "needs practice",
            Self::OnTrack => "on track",
            Self::Proficient => "proficient",
        }
    }

    /// Line appended to the suggestion prompt.
    pub fn prompt_annotation(self, ratio: f64) -> String {
        let guidance = match self {
            Self::NeedsPractice => {
                "Suggest a problem of the same difficulty that reinforces the same concepts."
            }
            Self::OnTrack => "Suggest a problem that continues steady progression.",
            Self::Proficient => {
                "Suggest a harder problem or one that introduces a new concept."
            }
        };
        format!(
            "\nPerformance: {} (time ratio {:.2}). {}",
            self.label(),
            ratio,
            guidance
        )
    }

    /// Human-readable verdict for the response body.
    pub fn message(self, topic: &str) -> String {
        match self {
            Self::NeedsPractice => format!(
                "You may need more practice with {}. Here is another problem at the same level.",
                topic
            ),
            Self::OnTrack => format!("You are on track with {}. Keep up the steady pace.", topic),
            Self::Proficient => format!(
                "You are proficient in {}. Time to take on a bigger challenge.",
                topic
            ),
        }
    }
}

/// Classify a ratio. The boundaries themselves are on track.
pub fn classify(ratio: f64) -> PerformanceBand {
    if ratio > NEEDS_PRACTICE_ABOVE {
        PerformanceBand::NeedsPractice
    } else if ratio < PROFICIENT_BELOW {
        PerformanceBand::Proficient
    } else {
        PerformanceBand::OnTrack
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub topic: String,
    pub difficulty: Difficulty,
    pub time_taken: u64,
    pub ratio: f64,
    pub band: PerformanceBand,
}

impl Evaluation {
    pub fn summary(&self) -> PerformanceSummary {
        PerformanceSummary {
            topic: self.topic.clone(),
            ratio: format!("{:.2}", self.ratio),
            message: self.band.message(&self.topic),
        }
    }

    pub fn prompt_annotation(&self) -> String {
        self.band.prompt_annotation(self.ratio)
    }
}

/// Evaluator with an in-memory, process-lifetime history of ratios per topic.
///
/// The history is diagnostic only; it does not feed back into evaluation.
#[derive(Debug, Default)]
pub struct PerformanceEvaluator {
    history: DashMap<String, Vec<f64>>,
}

impl PerformanceEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the ratio, classify it and record the sample.
    pub fn evaluate(&self, topic: &str, difficulty: Difficulty, time_taken: u64) -> Evaluation {
        let ratio = time_taken as f64 / f64::from(difficulty.benchmark_minutes());
        let band = classify(ratio);

        self.history.entry(topic.to_string()).or_default().push(ratio);
        debug!(topic, %difficulty, time_taken, ratio, band = band.label(), "Evaluated performance");

        Evaluation {
            topic: topic.to_string(),
            difficulty,
            time_taken,
            ratio,
            band,
        }
    }

    /// Recorded ratios for a topic, oldest first.
    pub fn history(&self, topic: &str) -> Vec<f64> {
        self.history
            .get(topic)
            .map(|ratios| ratios.clone())
            .unwrap_or_default()
    }

    /// Number of topics with at least one sample.
    pub fn topic_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
