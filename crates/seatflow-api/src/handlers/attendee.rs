//! Attendee lookup handler.

use axum::Json;
use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use seatflow_core::error::AppError;
use seatflow_entity::attendee::Attendee;

use crate::error::ApiError;
use crate::dto::request::LookupRequest;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// POST /api/attendees/lookup
///
/// Read-only identity lookup: returns the registration record whether or
/// not seats have been assigned yet. Uses POST so the identity triple
/// travels in the body rather than the query string.
pub async fn lookup(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> Result<Json<ApiResponse<Attendee>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid lookup request: {e}")))?;

    let session_id = Uuid::parse_str(req.session_id.trim())
        .map_err(|_| AppError::validation(format!("Session id is not a valid UUID: '{}'", req.session_id)))?;

    let attendee = state
        .attendees
        .find_by_identity(session_id, req.phone.trim(), req.name.trim())
        .await?
        .ok_or_else(|| AppError::not_found("No registration matches that phone number and name"))?;

    Ok(Json(ApiResponse::ok(attendee)))
}
