//! Attendee repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use seatflow_core::error::{AppError, ErrorKind};
use seatflow_core::result::AppResult;
use seatflow_entity::attendee::Attendee;

use crate::store::{AttendeeStore, AttendeeTotals};

/// Repository for attendee registration records.
#[derive(Debug, Clone)]
pub struct AttendeeRepository {
    pool: PgPool,
}

impl AttendeeRepository {
    /// Create a new attendee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendeeStore for AttendeeRepository {
    async fn find_by_identity(
        &self,
        session_id: Uuid,
        phone: &str,
        name: &str,
    ) -> AppResult<Option<Attendee>> {
        sqlx::query_as::<_, Attendee>(
            "SELECT * FROM attendees WHERE session_id = $1 AND phone = $2 AND name = $3",
        )
        .bind(session_id)
        .bind(phone)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find attendee", e))
    }

    async fn list_assigned(&self, session_id: Uuid) -> AppResult<Vec<Attendee>> {
        sqlx::query_as::<_, Attendee>(
            "SELECT * FROM attendees \
             WHERE session_id = $1 AND seat_number IS NOT NULL \
             ORDER BY created_at",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assigned attendees", e)
        })
    }

    async fn commit_seats(
        &self,
        id: Uuid,
        expected_version: i32,
        seats: &str,
    ) -> AppResult<Option<Attendee>> {
        // Zero rows back means the version moved underneath us.
        sqlx::query_as::<_, Attendee>(
            "UPDATE attendees \
             SET seat_number = $3, version = version + 1 \
             WHERE id = $1 AND version = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(expected_version)
        .bind(seats)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit seats", e))
    }

    async fn totals(&self, session_id: Uuid) -> AppResult<AttendeeTotals> {
        sqlx::query_as::<_, AttendeeTotals>(
            "SELECT COUNT(*) AS total_attendees, \
                    COUNT(seat_number) AS assigned_attendees, \
                    COALESCE(SUM(attendee_count), 0) AS requested_heads \
             FROM attendees WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to aggregate attendees", e)
        })
    }
}
