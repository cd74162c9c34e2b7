use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A single electricity measurement taken by a smart meter.
///
/// `reading` is the consumption in kW as reported by the meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectricityReading {
    pub time: DateTime<Utc>,
    pub reading: Decimal,
}

impl ElectricityReading {
    pub fn new(time: DateTime<Utc>, reading: Decimal) -> Self {
        Self { time, reading }
    }
}
