//! JSON / JSON-lines file source adapter

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::application::ports::{LoadedRecords, ParseStrategy, RecordSource, SourceError};
use crate::domain::flight::FlightRecord;

/// A whole input document: an array of records or one bare record
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<FlightRecord>),
    One(FlightRecord),
}

/// Reads flight records from a file on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Input path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<LoadedRecords, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound);
        }

        let bytes = fs::read(&self.path).map_err(|e| SourceError::Unreadable(e.to_string()))?;
        let text = String::from_utf8_lossy(&bytes);

        parse_records(&text)
    }
}

/// Parse input text as one JSON document, falling back to JSON lines.
pub fn parse_records(text: &str) -> Result<LoadedRecords, SourceError> {
    let text = text.trim();

    if let Ok(records) = parse_document(text) {
        return Ok(LoadedRecords {
            records,
            strategy: ParseStrategy::Document,
        });
    }

    parse_lines(text)
        .map(|records| LoadedRecords {
            records,
            strategy: ParseStrategy::Lines,
        })
        .map_err(|_| SourceError::InvalidFormat)
}

fn parse_document(text: &str) -> Result<Vec<FlightRecord>, serde_json::Error> {
    Ok(match serde_json::from_str(text)? {
        Document::Many(records) => records,
        Document::One(record) => vec![record],
    })
}

fn parse_lines(text: &str) -> Result<Vec<FlightRecord>, serde_json::Error> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str::<FlightRecord>)
        .collect()
}
