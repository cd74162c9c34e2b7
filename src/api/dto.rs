use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::ApiError;
use crate::models::ElectricityReading;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ElectricityReadingDto {
    pub time: DateTime<Utc>,
    /// kW
    pub reading: Decimal,
}

/// Request body for `POST /readings/store`.
///
/// Both fields are optional on the wire so a missing or `null` field is
/// reported as a validation failure instead of a deserialisation error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeterReadingsRequest {
    pub smart_meter_id: Option<String>,
    pub electricity_readings: Option<Vec<ElectricityReadingDto>>,
}

impl MeterReadingsRequest {
    /// Split into a meter ID and a non-empty batch of readings.
    pub fn validate(self) -> Result<(String, Vec<ElectricityReading>), ApiError> {
        let meter_id = match self.smart_meter_id {
            Some(id) if !id.is_empty() => id,
            Some(_) => return Err(ApiError::Validation("smartMeterId is empty".into())),
            None => return Err(ApiError::Validation("smartMeterId is missing".into())),
        };

        let readings = match self.electricity_readings {
            Some(readings) if !readings.is_empty() => readings,
            Some(_) => {
                return Err(ApiError::Validation(
                    "electricityReadings is empty".into(),
                ))
            }
            None => {
                return Err(ApiError::Validation(
                    "electricityReadings is missing".into(),
                ))
            }
        };

        Ok((meter_id, readings.into_iter().map(Into::into).collect()))
    }
}

impl From<ElectricityReading> for ElectricityReadingDto {
    fn from(r: ElectricityReading) -> Self {
        Self {
            time: r.time,
            reading: r.reading,
        }
    }
}

impl From<ElectricityReadingDto> for ElectricityReading {
    fn from(dto: ElectricityReadingDto) -> Self {
        Self::new(dto.time, dto.reading)
    }
}
