//! # codepace Companion
//!
//! The page-side half of codepace: a persistent problem timer, a one-shot
//! completion detector over page snapshots, and the flow that turns a solved
//! problem into a request for the next one.

pub mod client;
pub mod clock;
pub mod detector;
pub mod error;
pub mod flow;
pub mod store;
pub mod timer;
pub mod watcher;

pub use client::SuggestionClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use detector::{CompletionDetector, CompletionSession, MutationBatch, ProblemPage};
pub use error::CompanionError;
pub use flow::{Companion, JOURNEY_TOPIC, RESTART_GUARD_MS};
pub use store::{FileStore, MemoryStore};
pub use timer::TimerService;
pub use watcher::PageWatcher;
