//! Input infrastructure module

mod json_file;

pub use json_file::{parse_records, JsonFileSource};
