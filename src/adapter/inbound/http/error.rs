//! Translation of service errors into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domain::DomainError;
use crate::error::Error;

/// An error on its way back to an HTTP client as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Map a service error, prefixing internal failures with `context`.
    pub fn from_error(err: Error, context: &str) -> Self {
        match err {
            Error::Domain(domain) => Self::from(domain),
            other => {
                error!(error = %other, "{context}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{context}: {other}"),
                )
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput { reason } => Self::bad_request(reason),
            DomainError::ModelNotReady => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Model is still loading, try again shortly.",
            ),
            DomainError::NoMatch => Self::new(StatusCode::NOT_FOUND, "No matching product found"),
            DomainError::InternalConsistency { reason } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, reason)
            }
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Task failed: {err}"),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::invalid("x"), StatusCode::BAD_REQUEST),
            (DomainError::ModelNotReady, StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::NoMatch, StatusCode::NOT_FOUND),
            (DomainError::inconsistent("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn storage_errors_are_internal() {
        let err = ApiError::from_error(Error::Storage("disk full".into()), "Failed to process order");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to process order: storage error: disk full");
    }
}
