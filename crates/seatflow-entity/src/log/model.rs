//! Assignment log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::event::AssignmentEvent;

/// An immutable log entry recording one registration gateway invocation.
///
/// Exactly one entry is appended per invocation, whatever the outcome.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssignmentLogEntry {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// The session the request targeted, if it could be parsed.
    pub session_id: Option<Uuid>,
    /// The matched attendee, if lookup got that far.
    pub attendee_id: Option<Uuid>,
    /// Name as submitted by the caller.
    pub attendee_name: String,
    /// Phone as submitted by the caller.
    pub attendee_phone: String,
    /// Party size as submitted by the caller.
    pub requested_count: i32,
    /// Seats involved in the outcome, `", "`-delimited.
    pub assigned_seats: Option<String>,
    /// Outcome class of the invocation.
    pub event: AssignmentEvent,
    /// Failure detail for non-success outcomes.
    pub error_message: Option<String>,
    /// The record version the commit was attempted against.
    pub version_attempted: Option<i32>,
    /// The record version after a successful commit.
    pub version_final: Option<i32>,
    /// Wall-clock time spent handling the request.
    pub processing_time_ms: i64,
    /// When the entry was appended.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new assignment log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignmentLogEntry {
    /// The session the request targeted.
    pub session_id: Option<Uuid>,
    /// The matched attendee.
    pub attendee_id: Option<Uuid>,
    /// Name as submitted.
    pub attendee_name: String,
    /// Phone as submitted.
    pub attendee_phone: String,
    /// Party size as submitted.
    pub requested_count: i32,
    /// Seats involved in the outcome.
    pub assigned_seats: Option<String>,
    /// Outcome class.
    pub event: AssignmentEvent,
    /// Failure detail.
    pub error_message: Option<String>,
    /// Version the commit was attempted against.
    pub version_attempted: Option<i32>,
    /// Version after a successful commit.
    pub version_final: Option<i32>,
    /// Wall-clock handling time.
    pub processing_time_ms: i64,
}
