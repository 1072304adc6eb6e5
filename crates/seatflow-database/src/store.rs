//! Store traits the service layer depends on.
//!
//! Every trait has a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory implementation in [`crate::memory`], so services and
//! the HTTP layer can be exercised without a database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use seatflow_core::result::AppResult;
use seatflow_core::types::pagination::{PageRequest, PageResponse};
use seatflow_entity::attendee::Attendee;
use seatflow_entity::log::{AssignmentEvent, AssignmentLogEntry, CreateAssignmentLogEntry};
use seatflow_entity::seat::SeatRow;
use seatflow_entity::session::EventSession;

/// Aggregate counters over a session's attendee records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendeeTotals {
    /// Number of registration records.
    pub total_attendees: i64,
    /// Number of records with seats assigned.
    pub assigned_attendees: i64,
    /// Sum of party sizes across all records.
    pub requested_heads: i64,
}

/// Aggregate counters over a session's assignment log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::FromRow)]
pub struct AssignmentLogSummary {
    /// Total number of log entries.
    pub total: i64,
    /// Entries with event `success`.
    pub success: i64,
    /// Entries with event `conflict`.
    pub conflict: i64,
    /// Entries with event `retry`.
    pub retry: i64,
    /// Entries with event `error`.
    pub error: i64,
    /// Mean handling time across all entries, `None` when the log is empty.
    pub avg_processing_time_ms: Option<f64>,
}

/// Access to attendee registration records.
#[async_trait]
pub trait AttendeeStore: Send + Sync {
    /// Find the registration matching a session, phone, and name exactly.
    async fn find_by_identity(
        &self,
        session_id: Uuid,
        phone: &str,
        name: &str,
    ) -> AppResult<Option<Attendee>>;

    /// All attendees of the session that currently hold seats.
    async fn list_assigned(&self, session_id: Uuid) -> AppResult<Vec<Attendee>>;

    /// Conditionally write the seat list.
    ///
    /// The write succeeds only if the record's version still equals
    /// `expected_version`; on success the version is incremented by one
    /// and the updated row is returned. `None` means a concurrent writer
    /// got there first.
    async fn commit_seats(
        &self,
        id: Uuid,
        expected_version: i32,
        seats: &str,
    ) -> AppResult<Option<Attendee>>;

    /// Aggregate counters for the session.
    async fn totals(&self, session_id: Uuid) -> AppResult<AttendeeTotals>;
}

/// Access to session seat layouts.
#[async_trait]
pub trait SeatLayoutStore: Send + Sync {
    /// Active rows of the session, front to back (display order, then label).
    async fn list_active_rows(&self, session_id: Uuid) -> AppResult<Vec<SeatRow>>;
}

/// Access to the append-only assignment log.
#[async_trait]
pub trait AssignmentLogStore: Send + Sync {
    /// Append one log entry.
    async fn append(&self, entry: &CreateAssignmentLogEntry) -> AppResult<AssignmentLogEntry>;

    /// Page through a session's log, newest first, optionally by event.
    async fn search(
        &self,
        session_id: Uuid,
        event: Option<AssignmentEvent>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AssignmentLogEntry>>;

    /// Aggregate counters for a session's log.
    async fn summarize(&self, session_id: Uuid) -> AppResult<AssignmentLogSummary>;
}

/// Read access to event sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find a session by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EventSession>>;
}
