//! Report sink port interface

use thiserror::Error;

use crate::domain::report::OutputText;

/// Report sink errors
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    #[error("Cannot write output file: {0}")]
    WriteFailed(String),

    #[error("Cannot write to console: {0}")]
    ConsoleFailed(String),
}

/// Port for emitting a rendered report
pub trait ReportSink {
    /// Emit the report text.
    ///
    /// # Arguments
    /// * `text` - The rendered report
    fn emit(&self, text: &OutputText) -> Result<(), SinkError>;

    /// Human-readable destination, e.g. a file path
    fn target(&self) -> String;
}

/// Blanket implementation for boxed sink types
impl ReportSink for Box<dyn ReportSink> {
    fn emit(&self, text: &OutputText) -> Result<(), SinkError> {
        self.as_ref().emit(text)
    }

    fn target(&self) -> String {
        self.as_ref().target()
    }
}
