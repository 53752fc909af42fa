//! Output targets the generator can write into.
//!
//! This module provides:
//! - `OutputTarget`: Trait for output destinations
//! - `FileOutput`: Filesystem implementation
//! - `InMemorySink`: In-memory implementation for testing

mod file;
mod memory;
mod output;

pub use file::FileOutput;
pub use memory::InMemorySink;
pub use output::OutputTarget;
