//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Showbill
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Validation failures carry their per-field messages in the response body so
//! a form can be re-presented with the errors attached. Database and internal
//! errors are logged in full and reduced to a generic user-facing message;
//! raw internals never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use showbill_core::errors::DirectoryError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `DirectoryError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub DirectoryError);

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::Validation(_) => StatusCode::BAD_REQUEST,
            DirectoryError::UnknownReference(_) => StatusCode::BAD_REQUEST,
            DirectoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DirectoryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Format the error message as JSON
        let body = match &self.0 {
            DirectoryError::Validation(fields) => Json(json!({
                "error": self.0.to_string(),
                "fields": fields,
            })),
            DirectoryError::Database(report) => {
                tracing::error!("Database error: {report:?}");
                Json(json!({
                    "error": "An error occurred. The request could not be completed."
                }))
            }
            DirectoryError::Internal(err) => {
                tracing::error!("Internal error: {err}");
                Json(json!({ "error": "An internal error occurred." }))
            }
            _ => Json(json!({ "error": self.0.to_string() })),
        };

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from DirectoryError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, DirectoryError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Wraps the eyre error in a DirectoryError::Database variant so repository
/// failures can propagate with `?`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(DirectoryError::Database(err))
    }
}

/// Maps a DirectoryError to an HTTP response
pub fn map_error(err: DirectoryError) -> Response {
    AppError(err).into_response()
}

/// Terminal handler for routes that match nothing.
pub async fn route_fallback() -> Response {
    AppError(DirectoryError::NotFound(
        "The requested route does not exist".to_string(),
    ))
    .into_response()
}
