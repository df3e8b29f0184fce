//! Error types for member search.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemberSearchError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),
    #[error("Invalid sort: {0}")]
    InvalidSort(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<config::ConfigError> for MemberSearchError {
    fn from(err: config::ConfigError) -> Self {
        MemberSearchError::Configuration(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for MemberSearchError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        MemberSearchError::Database(sqlx::Error::Migrate(Box::new(err)))
    }
}

pub type Result<T> = std::result::Result<T, MemberSearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MemberSearchError::InvalidSort("unknown property 'height'".to_string());
        assert_eq!(err.to_string(), "Invalid sort: unknown property 'height'");

        let err = MemberSearchError::Database(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }
}
