//! Error handling for the Hawaii Climate API
//!
//! Every failure reaches the client as a generic message; query text and
//! schema details stay in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The dataset could not be reached or a query failed in the driver
    #[error("Observation store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// The request outlived the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The dataset does not carry the expected tables and columns
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::StoreUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "STORE_UNAVAILABLE".to_string(),
                    message: "The climate dataset is temporarily unavailable".to_string(),
                },
            ),
            AppError::Timeout => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "TIMEOUT".to_string(),
                    message: "The request took too long to complete".to_string(),
                },
            ),
            AppError::SchemaMismatch(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "SCHEMA_MISMATCH".to_string(),
                    message: "The climate dataset is misconfigured".to_string(),
                },
            ),
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: "The server is misconfigured".to_string(),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_are_service_unavailable() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        let (status, detail) = err.status_and_detail();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(detail.code, "STORE_UNAVAILABLE");
    }

    #[test]
    fn test_messages_hide_internal_details() {
        let err = AppError::SchemaMismatch("measurement is missing tobs".to_string());
        let (_, detail) = err.status_and_detail();
        assert!(!detail.message.contains("tobs"));

        let err = AppError::Internal("SELECT * FROM measurement".to_string());
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!detail.message.contains("SELECT"));
    }

    #[test]
    fn test_timeout_is_server_side() {
        let (status, detail) = AppError::Timeout.status_and_detail();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(detail.code, "TIMEOUT");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::from(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
