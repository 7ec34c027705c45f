//! # Error Handling Middleware
//!
//! This module maps `ProffyError` values onto HTTP status codes and the
//! `{ "error": <message> }` body the web and mobile clients expect.
//!
//! Failures whose detail must stay on the server (storage faults and failed
//! class creations) are logged here with their full cause chain, while the
//! caller only receives a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use proffy_core::errors::ProffyError;
use serde_json::json;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use proffy_api::middleware::error_handling::AppError;
/// use proffy_core::errors::ProffyError;
///
/// async fn handler(subject: Option<String>) -> Result<Json<String>, AppError> {
///     let subject = subject.ok_or(AppError(ProffyError::MissingFilters))?;
///     Ok(Json(subject))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ProffyError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ProffyError::MissingFilters | ProffyError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            ProffyError::CreationFailed(cause) => {
                tracing::error!("Class creation failed: {:?}", cause);
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            ProffyError::Database(cause) => {
                tracing::error!("Database error: {:?}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Automatic conversion from ProffyError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, ProffyError>` in handler functions that return `Result<T, AppError>`.
impl From<ProffyError> for AppError {
    fn from(err: ProffyError) -> Self {
        AppError(err)
    }
}
