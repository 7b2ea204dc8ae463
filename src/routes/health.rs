use axum::Json;

use super::types::HealthResponse;

/// Health check endpoint
///
/// Always reports `ok` while the process is serving; it does not probe dependencies.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
