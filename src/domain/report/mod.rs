//! Report domain module

mod line_format;
mod result_set;

pub use line_format::{LineFormat, OutputText};
pub use result_set::ResultSet;
