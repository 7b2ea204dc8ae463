//! OpenAPI document for the HTTP surface, served live and exportable to disk.

use std::path::Path;

use axum::Json;
use utoipa::OpenApi;

use crate::error::AppResult;
use crate::routes::{api_handlers, health, types};

#[derive(OpenApi)]
#[openapi(
    info(title = "API", version = "0.1.0"),
    paths(health::health_check, api_handlers::ping),
    components(schemas(types::HealthResponse, types::PingResponse)),
    tags(
        (name = "health", description = "Liveness"),
        (name = "api", description = "Application endpoints")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Write the pretty-printed OpenAPI document to `output`.
pub fn export_openapi(output: &Path) -> AppResult<()> {
    let schema = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(output, schema)?;
    Ok(())
}
