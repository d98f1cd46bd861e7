//! Key-value store implementations.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
