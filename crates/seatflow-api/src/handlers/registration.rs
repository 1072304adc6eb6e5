//! Seat-assignment handler.

use axum::Json;
use axum::extract::State;

use seatflow_service::RegistrationRequest;

use crate::error::ApiError;
use crate::dto::response::RegistrationResponse;
use crate::state::AppState;

/// POST /api/register
///
/// The single allocation endpoint. Validation, idempotent replay, seat
/// selection, the versioned commit, and audit logging all live in the
/// registration service; this handler only shapes the response.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegistrationRequest>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let outcome = state.registration.register(req).await?;

    let response = if outcome.already_assigned {
        RegistrationResponse::replayed(outcome.attendee)
    } else {
        RegistrationResponse::assigned(outcome.attendee)
    };
    Ok(Json(response))
}
