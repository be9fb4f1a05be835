//! Flight domain module

mod airtime;
mod record;

pub use airtime::AirtimeThreshold;
pub use record::{FieldValue, FlightRecord, AIR_TIME, DISTANCE, FL_DATE};
