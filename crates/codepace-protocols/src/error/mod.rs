//! Error types for the codepace protocol layer.

mod prompt;
mod provider;
mod store;

pub use prompt::*;
pub use provider::*;
pub use store::*;
