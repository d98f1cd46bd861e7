//! Problem-page scraping and completion detection.
//!
//! Pages are handled as HTML snapshots. Nothing here depends on a particular
//! page layout holding: missing elements degrade to empty values.

use futures::{Stream, StreamExt};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use codepace_protocols::{Difficulty, ProblemDetails};

use crate::error::CompanionError;

pub const TITLE_SELECTOR: &str = r#"[data-cy="question-title"]"#;
pub const DIFFICULTY_SELECTOR: &str = "[diff]";
pub const TOPICS_SELECTOR: &str = r#"[class*="topics-"] a"#;

pub const DEFAULT_SUCCESS_SELECTOR: &str = r#"[class*="success"]"#;
pub const DEFAULT_COMPLETION_MARKER: &str = "Accepted";

fn parse_selector(selector: &str) -> Result<Selector, CompanionError> {
    Selector::parse(selector).map_err(|e| CompanionError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Extracts [`ProblemDetails`] from a problem page.
pub struct ProblemPage {
    title: Selector,
    difficulty: Selector,
    topics: Selector,
}

impl ProblemPage {
    pub fn new() -> Result<Self, CompanionError> {
        Ok(Self {
            title: parse_selector(TITLE_SELECTOR)?,
            difficulty: parse_selector(DIFFICULTY_SELECTOR)?,
            topics: parse_selector(TOPICS_SELECTOR)?,
        })
    }

    /// Read title, difficulty and topics from `html`. `url` is carried through.
    pub fn extract_details(&self, html: &str, url: &str) -> ProblemDetails {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title)
            .next()
            .map(|el| element_text(el).trim().to_string())
            .unwrap_or_default();

        let difficulty = document
            .select(&self.difficulty)
            .next()
            .and_then(|el| element_text(el).parse::<Difficulty>().ok());

        let topics = document
            .select(&self.topics)
            .map(|el| element_text(el).trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        ProblemDetails {
            title,
            difficulty,
            topics,
            url: url.to_string(),
        }
    }
}

/// Completion predicate: some element matching the success selector contains
/// the marker text.
pub struct CompletionDetector {
    selector: Selector,
    marker: String,
}

impl CompletionDetector {
    pub fn new(selector: &str, marker: impl Into<String>) -> Result<Self, CompanionError> {
        Ok(Self {
            selector: parse_selector(selector)?,
            marker: marker.into(),
        })
    }

    pub fn with_defaults() -> Result<Self, CompanionError> {
        Self::new(DEFAULT_SUCCESS_SELECTOR, DEFAULT_COMPLETION_MARKER)
    }

    pub fn is_complete(&self, html: &str) -> bool {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .any(|el| element_text(el).contains(&self.marker))
    }
}

/// One observed change to the page, carrying the document after the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationBatch {
    pub sequence: u64,
    pub snapshot: String,
}

impl MutationBatch {
    pub fn new(sequence: u64, snapshot: impl Into<String>) -> Self {
        Self {
            sequence,
            snapshot: snapshot.into(),
        }
    }
}

/// A single observation session. Yields at most one completion.
pub struct CompletionSession {
    detector: CompletionDetector,
    finished: bool,
}

impl CompletionSession {
    pub fn new(detector: CompletionDetector) -> Self {
        Self {
            detector,
            finished: false,
        }
    }

    /// Consume mutation batches until one satisfies the predicate.
    ///
    /// The stream is dropped on return, which unsubscribes from further
    /// mutations. Returns `None` if the stream ends first or the session has
    /// already completed.
    pub async fn observe<S>(&mut self, mutations: S) -> Option<MutationBatch>
    where
        S: Stream<Item = MutationBatch>,
    {
        if self.finished {
            return None;
        }

        let mut mutations = std::pin::pin!(mutations);
        while let Some(batch) = mutations.next().await {
            if self.detector.is_complete(&batch.snapshot) {
                debug!("Completion detected at mutation {}", batch.sequence);
                self.finished = true;
                return Some(batch);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
