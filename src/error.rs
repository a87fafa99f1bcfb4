//! Error types for Banara server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes reported in the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
    NoSuchData = 3,
    PermissionDenied = 4,
    LocationUnavailable = 5,
    RemoteFailure = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Location permission denied: {0}")]
    PermissionDenied(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Remote database error: {0}")]
    RemoteDatabase(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::PermissionDenied(msg) => {
                (StatusCode::FORBIDDEN, ErrorCode::PermissionDenied, msg.clone())
            }
            AppError::LocationUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::LocationUnavailable,
                msg.clone(),
            ),
            AppError::RemoteDatabase(msg) => {
                tracing::error!("Remote database error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorCode::RemoteFailure,
                    "Remote database error".to_string(),
                )
            }
            AppError::Http(e) => {
                tracing::error!("HTTP error: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorCode::RemoteFailure,
                    "Remote database unreachable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let (status, code, message) = AppError::Validation("name is required".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, ErrorCode::BadValue);
        assert_eq!(message, "name is required");
    }

    #[test]
    fn test_remote_failure_hides_details() {
        let (status, code, message) =
            AppError::RemoteDatabase("401 Unauthorized: token expired".into()).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, ErrorCode::RemoteFailure);
        assert_eq!(message, "Remote database error");
    }

    #[test]
    fn test_internal_error_uses_failure_code() {
        let (status, code, message) = AppError::Internal("lock poisoned".into()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code as u32, 1);
        assert_eq!(message, "Internal server error");
    }

    #[test]
    fn test_permission_denied_is_forbidden() {
        let (status, _, _) = AppError::PermissionDenied("denied".into()).parts();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
