//! Event session repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use seatflow_core::error::{AppError, ErrorKind};
use seatflow_core::result::AppResult;
use seatflow_entity::session::EventSession;

use crate::store::SessionStore;

/// Repository for event sessions. Sessions are managed by a separate
/// admin tool; this service only reads them.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EventSession>> {
        sqlx::query_as::<_, EventSession>("SELECT * FROM event_sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }
}
