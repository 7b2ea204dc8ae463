use axum::Json;

use super::types::PingResponse;

#[utoipa::path(
    get,
    path = "/api/ping",
    responses(
        (status = 200, description = "Ping acknowledged", body = PingResponse),
    ),
    tag = "api"
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}
