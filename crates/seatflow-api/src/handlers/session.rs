//! Session seat-map and statistics handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use seatflow_service::seatmap::service::{SeatMap, SessionStats};

use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/sessions/{id}/seat-map
pub async fn seat_map(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SeatMap>>, ApiError> {
    let map = state.seat_maps.seat_map(id).await?;
    Ok(Json(ApiResponse::ok(map)))
}

/// GET /api/sessions/{id}/stats
pub async fn stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionStats>>, ApiError> {
    let stats = state.seat_maps.stats(id).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
