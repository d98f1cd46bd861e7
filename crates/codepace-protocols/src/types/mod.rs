//! Shared domain and wire types.

mod difficulty;
mod problem;
mod timer;
mod wire;

pub use difficulty::*;
pub use problem::*;
pub use timer::*;
pub use wire::*;

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
