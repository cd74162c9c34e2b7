use chrono::Utc;
use tracing::info;

use super::MeterReadingService;
use crate::generator::generate_readings;

/// Meters populated with synthetic readings at startup.
pub const DEMO_METER_IDS: [&str; 5] = [
    "smart-meter-0",
    "smart-meter-1",
    "smart-meter-2",
    "smart-meter-3",
    "smart-meter-4",
];

/// Stores `readings_per_meter` generated readings for each demo meter.
pub async fn seed_demo_meters(service: &MeterReadingService, readings_per_meter: usize) {
    let now = Utc::now();

    for meter_id in DEMO_METER_IDS {
        // ThreadRng is !Send; keep it out of scope across the await.
        let readings = {
            let mut rng = rand::thread_rng();
            generate_readings(readings_per_meter, now, &mut rng)
        };
        service.store_readings(meter_id, readings).await;
    }

    info!(
        meters = DEMO_METER_IDS.len(),
        readings_per_meter, "Seeded demo meters"
    );
}
