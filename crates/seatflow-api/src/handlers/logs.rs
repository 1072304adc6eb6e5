//! Assignment log handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use seatflow_core::error::AppError;
use seatflow_entity::log::AssignmentEvent;

use crate::error::ApiError;
use crate::dto::request::LogQuery;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/sessions/{id}/logs
///
/// Paginated search over a session's assignment log, newest first,
/// optionally restricted to one event kind.
pub async fn search_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
    Query(filters): Query<LogQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_session(&state, id).await?;

    let event: Option<AssignmentEvent> = filters
        .event
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .transpose()?;

    let page = state
        .logs
        .search(id, event, &params.into_page_request())
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/sessions/{id}/logs/summary
pub async fn summarize_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_session(&state, id).await?;
    let summary = state.logs.summarize(id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": summary })))
}

async fn require_session(state: &AppState, id: Uuid) -> Result<(), ApiError> {
    Ok(state
        .sessions
        .find_by_id(id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("Session not found"))?)
}
