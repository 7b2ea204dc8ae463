use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::api_handlers;
use super::health;
use crate::middleware::{cors_layer, request_id_middleware};
use crate::openapi;

/// Create application router
///
/// The origin list is applied once as the CORS policy for every route.
pub fn create_router(allowed_origins: &[String]) -> Router {
    let api_routes = Router::new().route("/ping", get(api_handlers::ping));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer(allowed_origins)),
        )
}
