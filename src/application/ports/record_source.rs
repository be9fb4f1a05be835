//! Record source port interface

use thiserror::Error;

use crate::domain::flight::FlightRecord;

/// Record source errors
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Cannot find input file")]
    NotFound,

    #[error("Cannot read input file: {0}")]
    Unreadable(String),

    #[error("Invalid JSON format in input file")]
    InvalidFormat,
}

/// Which parse attempt produced the records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// The whole input was one JSON value
    Document,
    /// One JSON value per non-blank line
    Lines,
}

impl ParseStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            ParseStrategy::Document => "JSON document",
            ParseStrategy::Lines => "JSON lines",
        }
    }
}

/// Records loaded from a source, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecords {
    pub records: Vec<FlightRecord>,
    pub strategy: ParseStrategy,
}

/// Port for loading flight records
pub trait RecordSource {
    /// Load and parse all records.
    ///
    /// # Returns
    /// The records in input order, or the first fatal error
    fn load(&self) -> Result<LoadedRecords, SourceError>;
}

/// Blanket implementation for boxed source types
impl RecordSource for Box<dyn RecordSource> {
    fn load(&self) -> Result<LoadedRecords, SourceError> {
        self.as_ref().load()
    }
}
