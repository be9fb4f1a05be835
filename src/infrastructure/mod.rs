//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces
//! backed by the filesystem and the console.

pub mod input;
pub mod output;

// Re-export adapters
pub use input::JsonFileSource;
pub use output::{ConsoleSink, FileSink};
