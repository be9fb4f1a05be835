//! Application layer - Use cases and port interfaces
//!
//! Contains the report pipeline and trait definitions
//! for reading records and emitting reports.

pub mod ports;
pub mod report;

// Re-export use cases
pub use report::{
    GenerateReportUseCase, ReportCallbacks, ReportError, ReportInput, ReportOutput,
};
