//! # Web API Route Definitions

use axum::routing::get;
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Member search routes, one per paging policy
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/members", get(handlers::members::search_members_v1))
        .route("/v2/members", get(handlers::members::search_members_v2))
        .route("/v3/members", get(handlers::members::search_members_v3))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::basic_health))
}

/// `/api-docs/openapi.json` - OpenAPI JSON document
#[cfg(feature = "web-api")]
pub fn docs_routes() -> Router<AppState> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(crate::web::openapi::openapi_json),
    )
}
