//! Error handling for the Weather Tourism Recommender
//!
//! Provides consistent JSON error responses; internal failure details are
//! logged but never sent to the caller.

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
    // Validation errors
    #[error("Missing required parameters: {0}")]
    MissingParameters(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data quality error: {0}")]
    DataQuality(String),

    // Not-found conditions
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    #[error("No data found for the given parameters")]
    NoData,

    // Upstream / infrastructure errors
    #[error("Record store fetch timed out")]
    FetchTimeout,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
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

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::MissingParameters(params) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "MISSING_PARAMETERS".to_string(),
                    message: format!("Missing required parameters: {}", params),
                },
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::DataQuality(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "DATA_QUALITY_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::RegionNotFound(region) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "REGION_NOT_FOUND".to_string(),
                    message: format!("Region '{}' not found", region),
                },
            ),
            AppError::NoData => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NO_DATA".to_string(),
                    message: "No data found for the given parameters".to_string(),
                },
            ),
            AppError::FetchTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorDetail {
                    code: "FETCH_TIMEOUT".to_string(),
                    message: "Fetching station records took too long".to_string(),
                },
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message: "A database error occurred".to_string(),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
