//! # Web API Error Types
//!
//! HTTP-facing errors. Every variant renders as
//! `{"error": {"code": ..., "message": ...}}` with a matching status code.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::MemberSearchError;

#[derive(Error, Debug)]
#[cfg_attr(feature = "web-api", derive(utoipa::ToSchema))]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,

    #[error("Database operation failed: {operation}")]
    DatabaseError { operation: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn database_error(operation: impl Into<String>) -> Self {
        Self::DatabaseError {
            operation: operation.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::DatabaseError { .. } | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ApiError::DatabaseError { .. } => "DATABASE_ERROR",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        });

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<MemberSearchError> for ApiError {
    fn from(err: MemberSearchError) -> Self {
        match err {
            MemberSearchError::InvalidPageRequest(message)
            | MemberSearchError::InvalidSort(message) => ApiError::BadRequest { message },
            MemberSearchError::Database(source) => {
                error!(error = %source, "Member store query failed");
                ApiError::database_error("member search")
            }
            MemberSearchError::Configuration(message) | MemberSearchError::Internal(message) => {
                error!(error = %message, "Member search failed");
                ApiError::Internal
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
