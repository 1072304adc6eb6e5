//! Attendee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::seat::SeatId;

/// A pre-registered attendee of an event session.
///
/// The `version` column implements optimistic concurrency: every seat
/// commit must name the version it read, and bumps it by exactly one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    /// Unique attendee identifier.
    pub id: Uuid,
    /// The session the attendee registered for.
    pub session_id: Uuid,
    /// Attendee name, as registered.
    pub name: String,
    /// Contact phone number (digits only).
    pub phone: String,
    /// Size of the attendee's party (including themselves).
    pub attendee_count: i32,
    /// Assigned seats as a `", "`-delimited list, `None` until assigned.
    pub seat_number: Option<String>,
    /// Optimistic concurrency version, starts at 0.
    pub version: i32,
    /// Whether the attendee registered on site rather than in advance.
    pub is_onsite: bool,
    /// When the registration was created.
    pub created_at: DateTime<Utc>,
}

impl Attendee {
    /// Whether seats have already been assigned to this attendee.
    pub fn is_assigned(&self) -> bool {
        self.seat_number
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Parse the stored seat list into typed seat ids.
    ///
    /// Malformed fragments are skipped so that one bad historical value
    /// cannot take the whole session down.
    pub fn seat_ids(&self) -> Vec<SeatId> {
        match self.seat_number.as_deref() {
            Some(raw) => raw
                .split(',')
                .filter_map(|part| part.trim().parse().ok())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Data required to create a new attendee registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendee {
    /// The session the attendee registers for.
    pub session_id: Uuid,
    /// Attendee name.
    pub name: String,
    /// Contact phone number (digits only).
    pub phone: String,
    /// Size of the attendee's party.
    pub attendee_count: i32,
    /// Whether this is an on-site registration.
    pub is_onsite: bool,
}
