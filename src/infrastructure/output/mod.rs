//! Output infrastructure module
//!
//! Report sinks for a file on disk and the console.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileSink;
