//! Ordered set of flight records selected for a report

use crate::domain::flight::{AirtimeThreshold, FlightRecord};

/// Records in input order, possibly narrowed by an air-time threshold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    records: Vec<FlightRecord>,
}

impl ResultSet {
    /// Wrap records without filtering
    pub fn new(records: Vec<FlightRecord>) -> Self {
        Self { records }
    }

    /// Keep only the records the threshold admits. `None` keeps everything.
    pub fn filter_by_airtime(self, threshold: Option<&AirtimeThreshold>) -> Self {
        match threshold {
            Some(threshold) => Self {
                records: self
                    .records
                    .into_iter()
                    .filter(|record| threshold.admits(record))
                    .collect(),
            },
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightRecord> {
        self.records.iter()
    }
}
