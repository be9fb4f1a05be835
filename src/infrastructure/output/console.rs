//! Console sink adapter

use std::io::{self, Write};

use crate::application::ports::{ReportSink, SinkError};
use crate::domain::report::OutputText;

/// Prints the report to stdout followed by a newline
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ConsoleSink {
    fn emit(&self, text: &OutputText) -> Result<(), SinkError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|_| stdout.flush())
            .map_err(|e| SinkError::ConsoleFailed(e.to_string()))
    }

    fn target(&self) -> String {
        "stdout".to_string()
    }
}
