use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};
use utoipa::OpenApi;

use super::{
    dto::{ElectricityReadingDto, MeterReadingsRequest},
    errors::ApiError,
};
use crate::readings::MeterReadingService;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Append a batch of readings to a meter, creating the meter if it is new.
#[utoipa::path(
    post,
    path = "/readings/store",
    request_body = MeterReadingsRequest,
    responses(
        (status = 200, description = "Readings stored"),
        (status = 500, description = "Missing body, meter ID or readings"),
    ),
    tag = "readings"
)]
pub async fn store_readings(
    State(service): State<MeterReadingService>,
    body: Result<Json<Option<MeterReadingsRequest>>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected meter readings body");
        ApiError::Validation(rejection.body_text())
    })?;
    let request =
        request.ok_or_else(|| ApiError::Validation("request body is null".into()))?;

    let (meter_id, readings) = request.validate().inspect_err(|e| {
        warn!(error = %e, "Rejected meter readings");
    })?;

    info!(meter_id = %meter_id, count = readings.len(), "Storing meter readings");
    service.store_readings(&meter_id, readings).await;

    Ok(StatusCode::OK)
}

/// Fetch every reading stored for a meter, oldest submission first.
#[utoipa::path(
    get,
    path = "/readings/read/{smartMeterId}",
    params(
        ("smartMeterId" = String, Path, description = "Smart meter ID"),
    ),
    responses(
        (status = 200, description = "Stored readings (possibly empty)", body = Vec<ElectricityReadingDto>),
        (status = 404, description = "Unknown meter"),
    ),
    tag = "readings"
)]
pub async fn read_readings(
    State(service): State<MeterReadingService>,
    Path(meter_id): Path<String>,
) -> Result<Json<Vec<ElectricityReadingDto>>, ApiError> {
    let readings = service.get_readings(&meter_id).await;
    let readings = readings.ok_or(ApiError::NotFound(meter_id))?;

    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(store_readings, read_readings, health),
    components(schemas(ElectricityReadingDto, MeterReadingsRequest)),
    tags(
        (name = "readings", description = "Smart meter reading endpoints"),
        (name = "system",  description = "System endpoints"),
    ),
    info(
        title = "Smart Meter Readings API",
        version = "0.1.0",
        description = "REST API for storing and reading smart meter electricity readings"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
