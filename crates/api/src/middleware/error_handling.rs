//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Rollcall API.
//! It maps domain-specific errors to appropriate HTTP status codes and JSON
//! error responses of the form `{"message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rollcall_core::errors::AttendanceError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `AttendanceError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use rollcall_api::middleware::error_handling::AppError;
/// use rollcall_core::errors::AttendanceError;
///
/// async fn handler(found: bool) -> Result<Json<&'static str>, AppError> {
///     if !found {
///         return Err(AppError(AttendanceError::NotFound("Member not found".into())));
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub AttendanceError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AttendanceError::NotFound(_) => StatusCode::NOT_FOUND,
            AttendanceError::Validation(_) => StatusCode::BAD_REQUEST,
            AttendanceError::Conflict(_) => StatusCode::CONFLICT,
            AttendanceError::Locked(_) => StatusCode::LOCKED,
            AttendanceError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AttendanceError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AttendanceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AttendanceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.0 {
            AttendanceError::Database(_) | AttendanceError::Internal(_) => {
                error!("request failed: {:?}", self.0);
            }
            AttendanceError::Misconfigured => error!("{}", self.0),
            _ => {}
        }

        let body = Json(json!({ "message": self.0.public_message() }));
        (status, body).into_response()
    }
}

/// Automatic conversion from AttendanceError to AppError
impl From<AttendanceError> for AppError {
    fn from(err: AttendanceError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Wraps the report in an `AttendanceError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AttendanceError::Database(err))
    }
}

/// Maps an AttendanceError to an HTTP response
pub fn map_error(err: AttendanceError) -> Response {
    AppError(err).into_response()
}
