//! # Member Search Handlers
//!
//! Three read-only views over the same search:
//! - `/v1/members`: every match, unpaged
//! - `/v2/members`: one page, total always counted
//! - `/v3/members`: one page, count skipped when the first page is short

use std::str::FromStr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::models::MemberTeamDto;
#[cfg(feature = "web-api")]
use crate::search::page::MemberTeamPage;
use crate::search::{MemberSearchCondition, Page, PageRequest, Sort};
use crate::web::errors::ApiError;
use crate::web::state::AppState;

/// Raw query parameters. Values stay strings so that empty values
/// (`ageGoe=`) read as absent and bad numbers become a JSON 400.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(
    feature = "web-api",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
pub struct MemberSearchParams {
    /// Exact username
    pub username: Option<String>,
    /// Exact team name
    pub team_name: Option<String>,
    /// Minimum age, inclusive
    pub age_goe: Option<String>,
    /// Maximum age, inclusive
    pub age_loe: Option<String>,
    /// Zero-based page number
    pub page: Option<String>,
    /// Page size
    pub size: Option<String>,
    /// `property[,asc|desc]` with property one of id, username, age, teamName
    pub sort: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_number<T: FromStr>(name: &str, value: &Option<String>) -> Result<Option<T>, ApiError> {
    present(value)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ApiError::bad_request(format!("{name} must be an integer, got '{raw}'")))
        })
        .transpose()
}

impl MemberSearchParams {
    pub fn condition(&self) -> Result<MemberSearchCondition, ApiError> {
        Ok(MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: parse_number::<i32>("ageGoe", &self.age_goe)?,
            age_loe: parse_number::<i32>("ageLoe", &self.age_loe)?,
        })
    }

    pub fn page_request(&self, default_size: u32, max_size: u32) -> Result<PageRequest, ApiError> {
        let page = parse_number::<u32>("page", &self.page)?.unwrap_or(0);
        let size = parse_number::<u32>("size", &self.size)?.unwrap_or(default_size);

        if size == 0 || size > max_size {
            return Err(ApiError::bad_request(format!(
                "size must be between 1 and {max_size}, got {size}"
            )));
        }

        let mut request = PageRequest::of(page, size)?;
        if let Some(sort) = present(&self.sort) {
            request = request.with_sort(Sort::from_str(sort)?);
        }
        Ok(request)
    }
}

/// Unpaged search: GET /v1/members
#[cfg_attr(feature = "web-api", utoipa::path(
    get,
    path = "/v1/members",
    params(MemberSearchParams),
    responses(
        (status = 200, description = "All matching members", body = [MemberTeamDto]),
        (status = 400, description = "Invalid parameter", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "members"
))]
pub async fn search_members_v1(
    State(state): State<AppState>,
    params: Result<Query<MemberSearchParams>, QueryRejection>,
) -> Result<Json<Vec<MemberTeamDto>>, ApiError> {
    let Query(params) = params?;
    let condition = params.condition()?;
    debug!(?condition, "GET /v1/members");

    let members = state.search_service.search(&condition).await?;
    Ok(Json(members))
}

/// Paged search with an unconditional count: GET /v2/members
#[cfg_attr(feature = "web-api", utoipa::path(
    get,
    path = "/v2/members",
    params(MemberSearchParams),
    responses(
        (status = 200, description = "One page of matching members", body = MemberTeamPage),
        (status = 400, description = "Invalid parameter", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "members"
))]
pub async fn search_members_v2(
    State(state): State<AppState>,
    params: Result<Query<MemberSearchParams>, QueryRejection>,
) -> Result<Json<Page<MemberTeamDto>>, ApiError> {
    let Query(params) = params?;
    let condition = params.condition()?;
    let request =
        params.page_request(state.config.default_page_size, state.config.max_page_size)?;
    debug!(?condition, ?request, "GET /v2/members");

    let page = state
        .search_service
        .search_page_simple(&condition, &request)
        .await?;
    Ok(Json(page))
}

/// Paged search with a deferred count: GET /v3/members
#[cfg_attr(feature = "web-api", utoipa::path(
    get,
    path = "/v3/members",
    params(MemberSearchParams),
    responses(
        (status = 200, description = "One page of matching members", body = MemberTeamPage),
        (status = 400, description = "Invalid parameter", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "members"
))]
pub async fn search_members_v3(
    State(state): State<AppState>,
    params: Result<Query<MemberSearchParams>, QueryRejection>,
) -> Result<Json<Page<MemberTeamDto>>, ApiError> {
    let Query(params) = params?;
    let condition = params.condition()?;
    let request =
        params.page_request(state.config.default_page_size, state.config.max_page_size)?;
    debug!(?condition, ?request, "GET /v3/members");

    let page = state
        .search_service
        .search_page_complex(&condition, &request)
        .await?;
    Ok(Json(page))
}
