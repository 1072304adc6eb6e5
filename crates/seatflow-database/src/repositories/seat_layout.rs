//! Seat layout repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use seatflow_core::error::{AppError, ErrorKind};
use seatflow_core::result::AppResult;
use seatflow_entity::seat::SeatRow;

use crate::store::SeatLayoutStore;

/// Repository for session seat layouts.
#[derive(Debug, Clone)]
pub struct SeatLayoutRepository {
    pool: PgPool,
}

impl SeatLayoutRepository {
    /// Create a new seat layout repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeatLayoutStore for SeatLayoutRepository {
    async fn list_active_rows(&self, session_id: Uuid) -> AppResult<Vec<SeatRow>> {
        sqlx::query_as::<_, SeatRow>(
            "SELECT * FROM seat_layout \
             WHERE session_id = $1 AND is_active = TRUE \
             ORDER BY display_order, row_label",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list seat rows", e))
    }
}
