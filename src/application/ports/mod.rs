//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod record_source;
pub mod report_sink;

// Re-export common types
pub use record_source::{LoadedRecords, ParseStrategy, RecordSource, SourceError};
pub use report_sink::{ReportSink, SinkError};
