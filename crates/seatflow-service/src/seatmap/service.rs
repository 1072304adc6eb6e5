//! Read-side assembly of seat maps and session statistics.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use seatflow_core::error::AppError;
use seatflow_core::result::AppResult;
use seatflow_database::store::{AttendeeStore, SeatLayoutStore, SessionStore};
use seatflow_entity::attendee::Attendee;
use seatflow_entity::seat::SeatId;
use seatflow_entity::session::EventSession;

/// One seat in the rendered map.
#[derive(Debug, Clone, Serialize)]
pub struct SeatStatus {
    /// The seat.
    pub seat: SeatId,
    /// Whether anyone holds the seat.
    pub occupied: bool,
    /// Name of the holder, when occupied.
    pub occupant: Option<String>,
}

/// One row in the rendered map.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMapRow {
    /// Row label as stored in the layout.
    pub row_label: String,
    /// Seats in index order.
    pub seats: Vec<SeatStatus>,
}

/// Full seat map of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMap {
    /// The session the map belongs to.
    pub session: EventSession,
    /// Rows front to back.
    pub rows: Vec<SeatMapRow>,
    /// Total number of seats in the layout.
    pub capacity: usize,
    /// Seats currently held.
    pub occupied_seats: usize,
}

/// Headline numbers for a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    /// The session.
    pub session: EventSession,
    /// Number of registration records.
    pub total_attendees: i64,
    /// Records that hold seats.
    pub assigned_attendees: i64,
    /// Sum of party sizes across all records.
    pub requested_heads: i64,
    /// Total seats in the layout.
    pub capacity: usize,
    /// Layout seats currently held.
    pub occupied_seats: usize,
    /// Layout seats still free.
    pub available_seats: usize,
}

/// Assembles seat maps and statistics for admin views.
#[derive(Clone)]
pub struct SeatMapService {
    /// Event sessions.
    sessions: Arc<dyn SessionStore>,
    /// Session seat layouts.
    layouts: Arc<dyn SeatLayoutStore>,
    /// Attendee registration records.
    attendees: Arc<dyn AttendeeStore>,
}

impl SeatMapService {
    /// Creates a new seat map service.
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        layouts: Arc<dyn SeatLayoutStore>,
        attendees: Arc<dyn AttendeeStore>,
    ) -> Self {
        Self {
            sessions,
            layouts,
            attendees,
        }
    }

    /// Render the full seat map with occupant names.
    pub async fn seat_map(&self, session_id: Uuid) -> AppResult<SeatMap> {
        let session = self.require_session(session_id).await?;
        let rows = self.layouts.list_active_rows(session_id).await?;
        let assigned = self.attendees.list_assigned(session_id).await?;

        let mut occupants: HashMap<SeatId, String> = HashMap::new();
        for attendee in &assigned {
            for seat in attendee.seat_ids() {
                occupants.insert(seat, attendee.name.clone());
            }
        }

        let mut map_rows = Vec::with_capacity(rows.len());
        let mut capacity = 0;
        let mut occupied_seats = 0;
        for row in &rows {
            let seats: Vec<SeatStatus> = row
                .seats()
                .into_iter()
                .map(|seat| {
                    let occupant = occupants.get(&seat).cloned();
                    let occupied = occupant.is_some();
                    SeatStatus {
                        seat,
                        occupied,
                        occupant,
                    }
                })
                .collect();
            capacity += seats.len();
            occupied_seats += seats.iter().filter(|s| s.occupied).count();
            map_rows.push(SeatMapRow {
                row_label: row.row_label.clone(),
                seats,
            });
        }

        Ok(SeatMap {
            session,
            rows: map_rows,
            capacity,
            occupied_seats,
        })
    }

    /// Compute headline numbers for a session.
    pub async fn stats(&self, session_id: Uuid) -> AppResult<SessionStats> {
        let session = self.require_session(session_id).await?;
        let totals = self.attendees.totals(session_id).await?;
        let rows = self.layouts.list_active_rows(session_id).await?;
        let assigned = self.attendees.list_assigned(session_id).await?;

        let space: HashSet<SeatId> = rows.iter().flat_map(|r| r.seats()).collect();
        let occupied: HashSet<SeatId> = assigned
            .iter()
            .flat_map(Attendee::seat_ids)
            .filter(|seat| space.contains(seat))
            .collect();

        let capacity = space.len();
        let occupied_seats = occupied.len();
        Ok(SessionStats {
            session,
            total_attendees: totals.total_attendees,
            assigned_attendees: totals.assigned_attendees,
            requested_heads: totals.requested_heads,
            capacity,
            occupied_seats,
            available_seats: capacity - occupied_seats,
        })
    }

    async fn require_session(&self, session_id: Uuid) -> AppResult<EventSession> {
        self.sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))
    }
}
