//! Unified API error handling
//!
//! Provides consistent error responses across all endpoints.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{DomainError, InvalidEnumValue};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            // Don't leak internal error details
            Self::Database(_) => "An internal error occurred".to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
            DomainError::InvalidEnumValue(e) => e.into(),
            DomainError::Database(e) => Self::Database(e),
        }
    }
}

impl From<InvalidEnumValue> for ApiError {
    fn from(err: InvalidEnumValue) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Unparseable path ids are reported as missing resources
impl From<PathRejection> for ApiError {
    fn from(err: PathRejection) -> Self {
        Self::NotFound(err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => {
                tracing::error!(error = ?e, "Database error");
            }
            _ => {
                tracing::warn!(error = %self, "API error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_http_status() {
        let missing: ApiError = DomainError::not_found("Task", 7).into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.public_message(), "Task 7 not found");

        let invalid: ApiError =
            DomainError::from(InvalidEnumValue::Status("later".to_string())).into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.public_message(), "unknown status 'later'");

        let db: ApiError = DomainError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.public_message(), "An internal error occurred");
        assert_eq!(db.error_code(), "DATABASE_ERROR");
    }
}
