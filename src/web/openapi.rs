//! # OpenAPI Documentation
//!
//! Generated with utoipa from the handler annotations.

use axum::Json;
use utoipa::OpenApi;

use crate::models::MemberTeamDto;
use crate::search::page::MemberTeamPage;
use crate::web::errors::ApiError;
use crate::web::handlers;
use crate::web::handlers::health::{HealthCheck, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::members::search_members_v1,
        handlers::members::search_members_v2,
        handlers::members::search_members_v3,
        handlers::health::basic_health,
    ),
    components(schemas(MemberTeamDto, MemberTeamPage, ApiError, HealthResponse, HealthCheck)),
    tags(
        (name = "members", description = "Member/team search"),
        (name = "health", description = "Liveness")
    ),
    info(title = "Member Search API")
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
