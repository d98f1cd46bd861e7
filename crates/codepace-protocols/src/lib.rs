//! # codepace Protocols
//!
//! Shared protocol definitions for the codepace workspace.
//! Contains only types, error enums and interface traits - no implementations.
//!
//! ## Core Traits
//!
//! - [`ModelClient`] - Trait for generative-language backends
//! - [`KeyValueStore`] - Trait for the durable key-value store used by the companion

pub mod error;
pub mod model;
pub mod store;
pub mod types;

pub use error::{PromptError, ProviderError, StoreError};
pub use model::ModelClient;
pub use store::{keys, KeyValueStore};
pub use types::*;
