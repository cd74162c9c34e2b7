use std::sync::Arc;

use tracing::debug;

use crate::{models::ElectricityReading, reading_store::ReadingStore};

/// Appends and looks up meter readings through an injected `ReadingStore`.
///
/// Input validation is the HTTP layer's job; this service trusts its callers.
#[derive(Clone)]
pub struct MeterReadingService {
    store: Arc<dyn ReadingStore>,
}

impl MeterReadingService {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Appends `readings` to the sequence for `meter_id`, creating an empty
    /// sequence first if the meter is unknown.
    pub async fn store_readings(&self, meter_id: &str, readings: Vec<ElectricityReading>) {
        debug!(meter_id = %meter_id, count = readings.len(), "Storing meter readings");
        self.store.append(meter_id, readings).await;
    }

    /// Returns every reading stored for `meter_id`, or `None` if the meter is unknown.
    /// A known meter with no readings yields `Some` with an empty vector.
    pub async fn get_readings(&self, meter_id: &str) -> Option<Vec<ElectricityReading>> {
        self.store.get(meter_id).await
    }

    pub async fn meter_ids(&self) -> Vec<String> {
        self.store.meter_ids().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::reading_store::InMemoryReadingStore;

    /// Records every call and answers lookups from a canned value.
    #[derive(Default)]
    struct RecordingStore {
        appended: Mutex<Vec<(String, Vec<ElectricityReading>)>>,
        lookups: Mutex<Vec<String>>,
        canned: Option<Vec<ElectricityReading>>,
    }

    #[async_trait]
    impl ReadingStore for RecordingStore {
        async fn append(&self, meter_id: &str, readings: Vec<ElectricityReading>) {
            self.appended
                .lock()
                .unwrap()
                .push((meter_id.to_owned(), readings));
        }

        async fn get(&self, meter_id: &str) -> Option<Vec<ElectricityReading>> {
            self.lookups.lock().unwrap().push(meter_id.to_owned());
            self.canned.clone()
        }

        async fn meter_ids(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn reading(time: &str, value: i64) -> ElectricityReading {
        ElectricityReading::new(
            time.parse::<DateTime<Utc>>().unwrap(),
            Decimal::from(value),
        )
    }

    #[tokio::test]
    async fn unknown_meter_returns_none() {
        let service = MeterReadingService::new(Arc::new(InMemoryReadingStore::new()));
        assert_eq!(service.get_readings("unknown-id").await, None);
    }

    #[tokio::test]
    async fn store_delegates_batch_to_store() {
        let store = Arc::new(RecordingStore::default());
        let service = MeterReadingService::new(store.clone());
        let readings = vec![reading("2024-04-26T00:00:10Z", 10)];

        service.store_readings("random-id", readings.clone()).await;

        let appended = store.appended.lock().unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].0, "random-id");
        assert_eq!(appended[0].1, readings);
    }

    #[tokio::test]
    async fn get_passes_through_store_answer() {
        let store = Arc::new(RecordingStore {
            canned: Some(Vec::new()),
            ..Default::default()
        });
        let service = MeterReadingService::new(store.clone());

        assert_eq!(service.get_readings("random-id").await, Some(Vec::new()));
        assert_eq!(*store.lookups.lock().unwrap(), vec!["random-id".to_owned()]);
    }

    #[tokio::test]
    async fn stored_readings_are_returned_in_order() {
        let service = MeterReadingService::new(Arc::new(InMemoryReadingStore::new()));
        let expected = vec![
            reading("2024-04-26T00:00:10Z", 10),
            reading("2024-04-26T00:00:20Z", 20),
            reading("2024-04-26T00:00:30Z", 30),
        ];

        service.store_readings("random-id", expected.clone()).await;

        assert_eq!(service.get_readings("random-id").await, Some(expected));
    }

    #[tokio::test]
    async fn repeated_stores_append() {
        let service = MeterReadingService::new(Arc::new(InMemoryReadingStore::new()));
        service
            .store_readings("random-id", vec![reading("2024-04-26T00:00:10Z", 10)])
            .await;
        service
            .store_readings("random-id", vec![reading("2024-04-26T00:00:20Z", 20)])
            .await;

        let got = service.get_readings("random-id").await.unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].reading, Decimal::from(20));
    }

    #[tokio::test]
    async fn empty_batch_yields_known_meter_with_no_readings() {
        let service = MeterReadingService::new(Arc::new(InMemoryReadingStore::new()));
        service.store_readings("random-id", Vec::new()).await;

        assert_eq!(service.get_readings("random-id").await, Some(Vec::new()));
        assert_eq!(service.meter_ids().await, vec!["random-id".to_owned()]);
    }
}
