//! Output file sink adapter

use std::fs;
use std::path::PathBuf;

use crate::application::ports::{ReportSink, SinkError};
use crate::domain::report::OutputText;

/// Writes the report to a file, replacing any existing content
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    fn emit(&self, text: &OutputText) -> Result<(), SinkError> {
        fs::write(&self.path, text.as_str()).map_err(|e| SinkError::WriteFailed(e.to_string()))
    }

    fn target(&self) -> String {
        self.path.display().to_string()
    }
}
