//! Domain layer - Core business logic
//!
//! Contains flight records, the air-time threshold, report formatting
//! and domain errors. This layer has no dependencies on external systems.

pub mod error;
pub mod flight;
pub mod report;

// Re-export common types
pub use error::*;
pub use flight::{AirtimeThreshold, FieldValue, FlightRecord};
pub use report::{LineFormat, OutputText, ResultSet};
