//! CLI presenter for diagnostic output

use colored::*;

/// Presenter for CLI output formatting.
///
/// Diagnostics go to stderr so stdout carries only the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    verbose: bool,
}

impl Presenter {
    /// Create a new presenter. Info lines are shown only when verbose.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".cyan(), message);
        }
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Summary of the loaded input
    pub fn format_loaded(&self, count: usize, strategy: &str) -> String {
        format!("Loaded {} {} from {}", count, plural(count), strategy)
    }

    /// Summary of the air-time filter
    pub fn format_filtered(&self, kept: usize, total: usize) -> String {
        format!("Kept {} of {} {} after airtime filter", kept, total, plural(total))
    }

    /// Summary of where the rendered report went
    pub fn format_emitted(&self, lines: usize, written: bool, displayed: bool) -> String {
        let destination = match (written, displayed) {
            (true, true) => "output file and console",
            (true, false) => "output file",
            (false, true) => "console",
            (false, false) => return "Nothing emitted: use --output or --display".to_string(),
        };
        format!("Rendered {} {} to {}", lines, plural_line(lines), destination)
    }
}

fn plural_line(count: usize) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "record"
    } else {
        "records"
    }
}
