//! CLI layer - Command-line interface
//!
//! Contains argument parsing, usage-error messages, diagnostic output,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{handle_parse_error, run_report, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, ReportOptions};
pub use presenter::Presenter;
