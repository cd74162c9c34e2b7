use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::ElectricityReading;

/// Storage capability behind `MeterReadingService`.
///
/// A meter ID that has been appended to always maps to a sequence, even an
/// empty one, so `get` can tell "unknown meter" apart from "no readings yet".
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Append `readings` to the sequence for `meter_id`, creating it first if absent.
    /// The whole batch lands atomically and in order.
    async fn append(&self, meter_id: &str, readings: Vec<ElectricityReading>);

    /// Snapshot of the readings stored for `meter_id`, or `None` for an unknown meter.
    async fn get(&self, meter_id: &str) -> Option<Vec<ElectricityReading>>;

    /// All known meter IDs, sorted.
    async fn meter_ids(&self) -> Vec<String>;
}

/// In-memory store of every reading per meter, in insertion order.
///
/// Wrapped in `Arc` so it can be cheaply cloned and shared across tasks.
/// Uses `tokio::sync::RwLock` so concurrent readers never block each other.
#[derive(Clone, Default)]
pub struct InMemoryReadingStore {
    inner: Arc<RwLock<HashMap<String, Vec<ElectricityReading>>>>,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingStore for InMemoryReadingStore {
    async fn append(&self, meter_id: &str, readings: Vec<ElectricityReading>) {
        self.inner
            .write()
            .await
            .entry(meter_id.to_owned())
            .or_default()
            .extend(readings);
    }

    async fn get(&self, meter_id: &str) -> Option<Vec<ElectricityReading>> {
        self.inner.read().await.get(meter_id).cloned()
    }

    async fn meter_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }
}
