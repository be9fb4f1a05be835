//! Flight Report - filter and format flight records
//!
//! This crate reads a JSON document or JSON-lines file of flight records,
//! optionally keeps only flights above an air-time threshold, and renders
//! `[FL_DATE ]AIR_TIME DISTANCE` lines to a file and/or the console.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Flight records, the air-time threshold, and report formatting
//! - **Application**: The report use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (JSON file input, file and console output)
//! - **CLI**: Command-line interface, argument parsing, and error reporting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
