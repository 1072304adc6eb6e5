//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use seatflow_core::error::{AppError, ErrorKind};

/// Standard API error response body.
///
/// Lost optimistic races additionally carry `"conflict": true` so callers
/// can distinguish "resubmit" from plain client errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Present (and `true`) only for optimistic-concurrency conflicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<bool>,
}

/// Newtype carrying an [`AppError`] across the handler boundary.
///
/// Handlers return `Result<_, ApiError>`; `?` on any `AppResult` converts
/// automatically.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, conflict, message) = match &err.kind {
            ErrorKind::Validation | ErrorKind::NotRegistered | ErrorKind::InsufficientSeats => {
                (StatusCode::BAD_REQUEST, None, err.message.clone())
            }
            ErrorKind::Conflict => (StatusCode::CONFLICT, Some(true), err.message.clone()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, None, err.message.clone()),
            // Store and configuration failures get full detail server-side
            // and a generic body, nothing actionable leaks to the caller.
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let body = ApiErrorResponse {
            error: message,
            conflict,
        };

        (status, Json(body)).into_response()
    }
}
