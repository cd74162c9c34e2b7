//! Synthetic electricity readings for demo meters and tests.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::models::ElectricityReading;

/// Spacing between consecutive generated readings.
pub const READING_INTERVAL_SECS: i64 = 10;

/// Decimal places kept on generated values.
const READING_SCALE: u32 = 4;

/// Generate `count` readings ending at `end`, oldest first, spaced
/// [`READING_INTERVAL_SECS`] apart. Each value lies in `[0, 1)` kW with
/// four decimal places.
pub fn generate_readings<R: Rng + ?Sized>(
    count: usize,
    end: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ElectricityReading> {
    (0..count)
        .rev()
        .map(|steps_back| {
            let time = end - Duration::seconds(steps_back as i64 * READING_INTERVAL_SECS);
            let units: i64 = rng.gen_range(0..10_i64.pow(READING_SCALE));
            ElectricityReading::new(time, Decimal::new(units, READING_SCALE))
        })
        .collect()
}
