//! # Health Check Handlers

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::web::errors::ApiError;
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "web-api", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    pub status: String,
    pub store: HealthCheck,
}

/// Result of a single dependency check
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "web-api", derive(utoipa::ToSchema))]
pub struct HealthCheck {
    pub status: String,
    pub duration_ms: u64,
}

/// Liveness probe backed by a store round trip: GET /health
#[cfg_attr(feature = "web-api", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are reachable", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = ApiError)
    ),
    tag = "health"
))]
pub async fn basic_health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let start = Instant::now();
    let result = state.store().ping().await;
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(()) => {
            debug!(duration_ms = duration_ms, "Health check passed");
            Ok(Json(HealthResponse {
                status: "healthy".to_string(),
                store: HealthCheck {
                    status: "healthy".to_string(),
                    duration_ms,
                },
            }))
        }
        Err(err) => {
            error!(error = %err, duration_ms = duration_ms, "Health check failed");
            Err(ApiError::ServiceUnavailable)
        }
    }
}
