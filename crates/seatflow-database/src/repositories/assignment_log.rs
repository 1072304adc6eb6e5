//! Assignment log repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use seatflow_core::error::{AppError, ErrorKind};
use seatflow_core::result::AppResult;
use seatflow_core::types::pagination::{PageRequest, PageResponse};
use seatflow_entity::log::{AssignmentEvent, AssignmentLogEntry, CreateAssignmentLogEntry};

use crate::store::{AssignmentLogStore, AssignmentLogSummary};

/// Repository for the append-only assignment log.
#[derive(Debug, Clone)]
pub struct AssignmentLogRepository {
    pool: PgPool,
}

impl AssignmentLogRepository {
    /// Create a new assignment log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentLogStore for AssignmentLogRepository {
    async fn append(&self, entry: &CreateAssignmentLogEntry) -> AppResult<AssignmentLogEntry> {
        sqlx::query_as::<_, AssignmentLogEntry>(
            "INSERT INTO assignment_log \
             (session_id, attendee_id, attendee_name, attendee_phone, requested_count, \
              assigned_seats, event, error_message, version_attempted, version_final, \
              processing_time_ms) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(entry.session_id)
        .bind(entry.attendee_id)
        .bind(&entry.attendee_name)
        .bind(&entry.attendee_phone)
        .bind(entry.requested_count)
        .bind(&entry.assigned_seats)
        .bind(entry.event)
        .bind(&entry.error_message)
        .bind(entry.version_attempted)
        .bind(entry.version_final)
        .bind(entry.processing_time_ms)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append log entry", e))
    }

    async fn search(
        &self,
        session_id: Uuid,
        event: Option<AssignmentEvent>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AssignmentLogEntry>> {
        let mut conditions = vec!["session_id = $1".to_string()];
        let mut param_idx = 2u32;

        if event.is_some() {
            conditions.push(format!("event = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = format!("WHERE {}", conditions.join(" AND "));

        let count_sql = format!("SELECT COUNT(*) FROM assignment_log {where_clause}");
        let select_sql = format!(
            "SELECT * FROM assignment_log {where_clause} \
             ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        // Build dynamic queries
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(session_id);
        let mut select_query =
            sqlx::query_as::<_, AssignmentLogEntry>(&select_sql).bind(session_id);

        if let Some(ev) = event {
            count_query = count_query.bind(ev);
            select_query = select_query.bind(ev);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count log entries", e)
        })?;

        let entries = select_query
            .bind(page.sql_limit())
            .bind(page.sql_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search assignment log", e)
            })?;

        Ok(PageResponse::new(entries, total as u64, page))
    }

    async fn summarize(&self, session_id: Uuid) -> AppResult<AssignmentLogSummary> {
        sqlx::query_as::<_, AssignmentLogSummary>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE event = 'success') AS success, \
                    COUNT(*) FILTER (WHERE event = 'conflict') AS conflict, \
                    COUNT(*) FILTER (WHERE event = 'retry') AS retry, \
                    COUNT(*) FILTER (WHERE event = 'error') AS error, \
                    AVG(processing_time_ms)::DOUBLE PRECISION AS avg_processing_time_ms \
             FROM assignment_log WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to summarize assignment log", e)
        })
    }
}
