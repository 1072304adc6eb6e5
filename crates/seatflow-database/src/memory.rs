//! In-memory store implementations.
//!
//! Backed by Tokio mutexes. These power the unit and integration test
//! suites, and are handy for poking at the service without PostgreSQL.
//! The attendee and log stores can be switched into a failing mode to
//! exercise store-error paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use seatflow_core::error::AppError;
use seatflow_core::result::AppResult;
use seatflow_core::types::pagination::{PageRequest, PageResponse};
use seatflow_entity::attendee::{Attendee, CreateAttendee};
use seatflow_entity::log::{AssignmentEvent, AssignmentLogEntry, CreateAssignmentLogEntry};
use seatflow_entity::seat::{CreateSeatRow, SeatRow};
use seatflow_entity::session::EventSession;

use crate::store::{
    AssignmentLogStore, AssignmentLogSummary, AttendeeStore, AttendeeTotals, SeatLayoutStore,
    SessionStore,
};

/// In-memory [`AttendeeStore`].
#[derive(Debug, Default)]
pub struct MemoryAttendeeStore {
    records: Mutex<Vec<Attendee>>,
    failing: AtomicBool,
}

impl MemoryAttendeeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a registration record with no seats and version 0.
    pub async fn insert(&self, data: CreateAttendee) -> Attendee {
        let attendee = Attendee {
            id: Uuid::new_v4(),
            session_id: data.session_id,
            name: data.name,
            phone: data.phone,
            attendee_count: data.attendee_count,
            seat_number: None,
            version: 0,
            is_onsite: data.is_onsite,
            created_at: Utc::now(),
        };
        self.records.lock().await.push(attendee.clone());
        attendee
    }

    /// Fetch a record by id, for test assertions.
    pub async fn get(&self, id: Uuid) -> Option<Attendee> {
        self.records.lock().await.iter().find(|a| a.id == id).cloned()
    }

    /// Make every subsequent operation fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failing(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::database("Simulated attendee store failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl AttendeeStore for MemoryAttendeeStore {
    async fn find_by_identity(
        &self,
        session_id: Uuid,
        phone: &str,
        name: &str,
    ) -> AppResult<Option<Attendee>> {
        self.check_failing()?;
        Ok(self
            .records
            .lock()
            .await
            .iter()
            .find(|a| a.session_id == session_id && a.phone == phone && a.name == name)
            .cloned())
    }

    async fn list_assigned(&self, session_id: Uuid) -> AppResult<Vec<Attendee>> {
        self.check_failing()?;
        Ok(self
            .records
            .lock()
            .await
            .iter()
            .filter(|a| a.session_id == session_id && a.is_assigned())
            .cloned()
            .collect())
    }

    async fn commit_seats(
        &self,
        id: Uuid,
        expected_version: i32,
        seats: &str,
    ) -> AppResult<Option<Attendee>> {
        self.check_failing()?;
        let mut records = self.records.lock().await;
        let Some(record) = records
            .iter_mut()
            .find(|a| a.id == id && a.version == expected_version)
        else {
            return Ok(None);
        };
        record.seat_number = Some(seats.to_string());
        record.version += 1;
        Ok(Some(record.clone()))
    }

    async fn totals(&self, session_id: Uuid) -> AppResult<AttendeeTotals> {
        self.check_failing()?;
        let records = self.records.lock().await;
        let in_session = records.iter().filter(|a| a.session_id == session_id);
        let mut totals = AttendeeTotals {
            total_attendees: 0,
            assigned_attendees: 0,
            requested_heads: 0,
        };
        for attendee in in_session {
            totals.total_attendees += 1;
            if attendee.is_assigned() {
                totals.assigned_attendees += 1;
            }
            totals.requested_heads += i64::from(attendee.attendee_count);
        }
        Ok(totals)
    }
}

/// In-memory [`SeatLayoutStore`].
#[derive(Debug, Default)]
pub struct MemorySeatLayoutStore {
    rows: Mutex<Vec<SeatRow>>,
}

impl MemorySeatLayoutStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a seat row.
    pub async fn insert(&self, data: CreateSeatRow) -> SeatRow {
        let row = SeatRow {
            id: Uuid::new_v4(),
            session_id: data.session_id,
            row_label: data.row_label,
            seat_count: data.seat_count,
            display_order: data.display_order,
            is_active: data.is_active,
            created_at: Utc::now(),
        };
        self.rows.lock().await.push(row.clone());
        row
    }
}

#[async_trait]
impl SeatLayoutStore for MemorySeatLayoutStore {
    async fn list_active_rows(&self, session_id: Uuid) -> AppResult<Vec<SeatRow>> {
        let mut rows: Vec<SeatRow> = self
            .rows
            .lock()
            .await
            .iter()
            .filter(|r| r.session_id == session_id && r.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            (a.display_order, &a.row_label).cmp(&(b.display_order, &b.row_label))
        });
        Ok(rows)
    }
}

/// In-memory [`AssignmentLogStore`].
#[derive(Debug, Default)]
pub struct MemoryAssignmentLogStore {
    entries: Mutex<Vec<AssignmentLogEntry>>,
    failing: AtomicBool,
}

impl MemoryAssignmentLogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in append order, for test assertions.
    pub async fn entries(&self) -> Vec<AssignmentLogEntry> {
        self.entries.lock().await.clone()
    }

    /// Make every subsequent operation fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failing(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::database("Simulated log store failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl AssignmentLogStore for MemoryAssignmentLogStore {
    async fn append(&self, entry: &CreateAssignmentLogEntry) -> AppResult<AssignmentLogEntry> {
        self.check_failing()?;
        let stored = AssignmentLogEntry {
            id: Uuid::new_v4(),
            session_id: entry.session_id,
            attendee_id: entry.attendee_id,
            attendee_name: entry.attendee_name.clone(),
            attendee_phone: entry.attendee_phone.clone(),
            requested_count: entry.requested_count,
            assigned_seats: entry.assigned_seats.clone(),
            event: entry.event,
            error_message: entry.error_message.clone(),
            version_attempted: entry.version_attempted,
            version_final: entry.version_final,
            processing_time_ms: entry.processing_time_ms,
            created_at: Utc::now(),
        };
        self.entries.lock().await.push(stored.clone());
        Ok(stored)
    }

    async fn search(
        &self,
        session_id: Uuid,
        event: Option<AssignmentEvent>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AssignmentLogEntry>> {
        self.check_failing()?;
        let entries = self.entries.lock().await;
        let matching: Vec<AssignmentLogEntry> = entries
            .iter()
            .rev()
            .filter(|e| e.session_id == Some(session_id))
            .filter(|e| event.is_none_or(|ev| e.event == ev))
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.sql_offset() as usize)
            .take(page.sql_limit() as usize)
            .collect();
        Ok(PageResponse::new(items, total, page))
    }

    async fn summarize(&self, session_id: Uuid) -> AppResult<AssignmentLogSummary> {
        self.check_failing()?;
        let entries = self.entries.lock().await;
        let mut summary = AssignmentLogSummary {
            total: 0,
            success: 0,
            conflict: 0,
            retry: 0,
            error: 0,
            avg_processing_time_ms: None,
        };
        let mut elapsed_sum = 0i64;
        for entry in entries.iter().filter(|e| e.session_id == Some(session_id)) {
            summary.total += 1;
            elapsed_sum += entry.processing_time_ms;
            match entry.event {
                AssignmentEvent::Success => summary.success += 1,
                AssignmentEvent::Conflict => summary.conflict += 1,
                AssignmentEvent::Retry => summary.retry += 1,
                AssignmentEvent::Error => summary.error += 1,
            }
        }
        if summary.total > 0 {
            summary.avg_processing_time_ms = Some(elapsed_sum as f64 / summary.total as f64);
        }
        Ok(summary)
    }
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<Vec<EventSession>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session.
    pub async fn insert(&self, session: EventSession) {
        self.sessions.lock().await.push(session);
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EventSession>> {
        Ok(self
            .sessions
            .lock()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }
}
