//! Report line formatting

use std::fmt;

use crate::domain::flight::FlightRecord;

use super::result_set::ResultSet;

/// Layout of one report line: `[FL_DATE ]AIR_TIME DISTANCE`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormat {
    include_date: bool,
}

impl LineFormat {
    pub const fn new(include_date: bool) -> Self {
        Self { include_date }
    }

    /// Format a single record
    pub fn format_line(&self, record: &FlightRecord) -> String {
        if self.include_date {
            format!(
                "{} {} {}",
                record.flight_date(),
                record.air_time(),
                record.distance()
            )
        } else {
            format!("{} {}", record.air_time(), record.distance())
        }
    }

    /// Format every record and join the lines with `\n`
    pub fn render(&self, results: &ResultSet) -> OutputText {
        let lines: Vec<String> = results.iter().map(|r| self.format_line(r)).collect();
        OutputText {
            text: lines.join("\n"),
            lines: lines.len(),
        }
    }
}

/// Rendered report. No trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputText {
    text: String,
    lines: usize,
}

impl OutputText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of records rendered
    pub fn line_count(&self) -> usize {
        self.lines
    }
}

impl fmt::Display for OutputText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
