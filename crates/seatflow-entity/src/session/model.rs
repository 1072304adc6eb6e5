//! Event session entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An event session that attendees register for.
///
/// Sessions are managed elsewhere; this service only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventSession {
    /// Unique session identifier.
    pub id: Uuid,
    /// Human-readable session name.
    pub name: String,
    /// The day the session takes place.
    pub session_date: Option<NaiveDate>,
    /// Venue description.
    pub location: Option<String>,
    /// Whether the session is open for seat assignment.
    pub is_active: bool,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}
