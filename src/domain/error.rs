//! Domain error types

use thiserror::Error;

/// Error when parsing an air-time threshold
#[derive(Debug, Clone, Error)]
#[error("Airtime must be a number")]
pub struct AirtimeParseError {
    pub input: String,
}
