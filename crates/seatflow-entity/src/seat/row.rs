//! Seat row layout entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::id::SeatId;

/// A physical row of seats in a session's layout.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SeatRow {
    /// Unique row identifier.
    pub id: Uuid,
    /// The session this row belongs to.
    pub session_id: Uuid,
    /// Row label, a single letter such as `"A"`.
    pub row_label: String,
    /// Number of seats in this row.
    pub seat_count: i32,
    /// Position of the row in the venue, front to back.
    pub display_order: i32,
    /// Whether the row participates in assignment.
    pub is_active: bool,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl SeatRow {
    /// The row letter, if the label is a single ASCII letter.
    ///
    /// Rows with any other label shape are ignored by the seat-space
    /// builder rather than failing requests.
    pub fn row_char(&self) -> Option<char> {
        let label = self.row_label.trim();
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            _ => None,
        }
    }

    /// All seat ids in this row, in index order.
    ///
    /// Indices are capped at 999, the widest value a seat id renders.
    pub fn seats(&self) -> Vec<SeatId> {
        let Some(row) = self.row_char() else {
            return Vec::new();
        };
        (1..=self.seat_count.clamp(0, 999) as u16)
            .map(|index| SeatId::new(row, index))
            .collect()
    }
}

/// Data required to create a new seat row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSeatRow {
    /// The session the row belongs to.
    pub session_id: Uuid,
    /// Row label.
    pub row_label: String,
    /// Number of seats in the row.
    pub seat_count: i32,
    /// Position of the row, front to back.
    pub display_order: i32,
    /// Whether the row participates in assignment.
    pub is_active: bool,
}
