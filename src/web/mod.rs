//! # Web API Module
//!
//! Axum-based REST API exposing member search.
//!
//! - [`routes`] - HTTP route definitions
//! - [`handlers`] - Request handlers
//! - [`state`] - Shared application state
//! - [`errors`] - API error type and its JSON responses

pub mod errors;
pub mod handlers;
#[cfg(feature = "web-api")]
pub mod openapi;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use state::AppState;

/// Create the Axum application with all routes and middleware
pub fn create_app(app_state: AppState) -> Router {
    let request_timeout = Duration::from_millis(app_state.config.request_timeout_ms);

    #[allow(unused_mut)]
    let mut router = Router::new()
        .merge(routes::health_routes())
        .merge(routes::member_routes());

    #[cfg(feature = "web-api")]
    {
        router = router.merge(routes::docs_routes());
    }

    router
        .layer(tower_http::timeout::TimeoutLayer::new(request_timeout))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(app_state)
}
