//! Shared API types
//!
//! Error responses and the success envelope returned by write endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::DataError;
use crate::domain::filters::FilterError;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// A rejected filter string is always the client's fault
    pub fn from_filter(e: FilterError) -> Self {
        tracing::debug!(error = %e, "Rejected filter");
        Self::bad_request(e.code(), e.to_string())
    }

    pub fn from_data(e: DataError) -> Self {
        match e {
            DataError::Conflict(message) => Self::conflict("BOOK_EXISTS", message),
            DataError::NotFound(message) => Self::not_found("BOOK_NOT_FOUND", message),
            other => {
                tracing::error!(error = %other, "Data error");
                Self::internal("Database operation failed")
            }
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(e: FilterError) -> Self {
        Self::from_filter(e)
    }
}

impl From<DataError> for ApiError {
    fn from(e: DataError) -> Self {
        Self::from_data(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Conflict { code, message } => (StatusCode::CONFLICT, "conflict", code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

/// Result envelope for write operations
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Always `success` for 2xx responses
    pub status: &'static str,
    pub code: u16,
    /// Human readable description of what happened
    pub metadata: String,
}

impl MessageResponse {
    pub fn success(metadata: impl Into<String>) -> Self {
        Self {
            status: "success",
            code: StatusCode::OK.as_u16(),
            metadata: metadata.into(),
        }
    }
}
