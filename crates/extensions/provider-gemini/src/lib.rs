//! # codepace Provider - Gemini
//!
//! Google Gemini `generateContent` client for codepace.

mod client;
mod provider;
mod types;

pub use client::{GeminiClient, GeminiClientConfig};
pub use provider::GeminiProvider;
pub use types::*;
