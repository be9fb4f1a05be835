//! Air-time threshold value object

use std::str::FromStr;

use crate::domain::error::AirtimeParseError;

use super::record::FlightRecord;

/// Exclusive lower bound on `AIR_TIME`.
/// Always a finite number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AirtimeThreshold {
    minutes: f64,
}

impl AirtimeThreshold {
    /// Create a threshold, rejecting NaN and infinities
    pub fn new(minutes: f64) -> Result<Self, AirtimeParseError> {
        if minutes.is_finite() {
            Ok(Self { minutes })
        } else {
            Err(AirtimeParseError {
                input: minutes.to_string(),
            })
        }
    }

    /// Threshold value
    pub const fn value(&self) -> f64 {
        self.minutes
    }

    /// True if the record has a truthy `AIR_TIME` strictly above the threshold
    pub fn admits(&self, record: &FlightRecord) -> bool {
        let air_time = record.air_time();
        air_time.is_truthy()
            && air_time
                .as_number()
                .is_some_and(|minutes| minutes > self.minutes)
    }
}

impl FromStr for AirtimeThreshold {
    type Err = AirtimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes: f64 = s
            .trim()
            .parse()
            .map_err(|_| AirtimeParseError { input: s.to_string() })?;

        Self::new(minutes).map_err(|_| AirtimeParseError { input: s.to_string() })
    }
}
