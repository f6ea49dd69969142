//! Synthetic health record endpoint.

use axum::Json;
use axum::http::Method;
use health_data::HealthRecord;

use crate::error::ApiError;

/// GET /api/health — returns a freshly generated health record.
#[tracing::instrument]
pub async fn get() -> Json<HealthRecord> {
    let record = HealthRecord::random();

    metrics::counter!("health_records_generated_total").increment(1);
    tracing::debug!(user_id = %record.user_id, steps = record.steps, "generated health record");

    Json(record)
}

/// Any other method on /api/health — always 405.
#[tracing::instrument]
pub async fn method_not_allowed(method: Method) -> ApiError {
    metrics::counter!("health_records_rejected_total", "method" => method.to_string())
        .increment(1);
    tracing::warn!(%method, "rejected request to health record endpoint");

    ApiError::MethodNotAllowed
}
