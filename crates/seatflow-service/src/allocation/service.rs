//! Registration gateway: validation, idempotent replay, allocation,
//! commit, and the one-log-entry-per-invocation contract.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use seatflow_core::error::AppError;
use seatflow_core::result::AppResult;
use seatflow_database::store::{AttendeeStore, SeatLayoutStore};
use seatflow_entity::attendee::Attendee;
use seatflow_entity::log::{AssignmentEvent, CreateAssignmentLogEntry};
use seatflow_entity::seat::SeatId;

use super::allocator::{self, SeatSelection};
use super::committer::{CommitOutcome, SeatCommitter};
use super::logger::AssignmentLogger;

/// A seat-assignment request as submitted by the caller.
///
/// All fields default so that missing values reach validation (and the
/// assignment log) instead of being rejected during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    /// Contact phone number, 10 or 11 digits.
    #[serde(default)]
    #[validate(custom(function = validate_phone))]
    pub phone: String,
    /// Attendee name, 2 to 50 characters.
    #[serde(default)]
    #[validate(length(min = 2, max = 50, message = "Name must be 2 to 50 characters"))]
    pub name: String,
    /// Party size, at least 1. Signed so that a negative value reaches
    /// validation (and the assignment log) instead of failing to parse.
    #[serde(default)]
    #[validate(range(min = 1, message = "Party size must be at least 1"))]
    pub attendee_count: i32,
    /// Target session id.
    #[serde(default)]
    #[validate(length(min = 1, message = "Session id is required"))]
    pub session_id: String,
}

impl RegistrationRequest {
    /// Trim caller-supplied text fields.
    fn normalized(&self) -> Self {
        Self {
            phone: self.phone.trim().to_string(),
            name: self.name.trim().to_string(),
            attendee_count: self.attendee_count,
            session_id: self.session_id.trim().to_string(),
        }
    }
}

/// Result of a registration call that produced seats.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationOutcome {
    /// The attendee record after the call.
    pub attendee: Attendee,
    /// True when the seats were committed by an earlier request and are
    /// being replayed unchanged.
    pub already_assigned: bool,
}

/// Orchestrates one seat-assignment request end to end.
///
/// Every invocation appends exactly one assignment log entry, whatever
/// branch it exits through. Log appends themselves never fail a request.
#[derive(Clone)]
pub struct RegistrationService {
    /// Attendee registration records.
    attendees: Arc<dyn AttendeeStore>,
    /// Session seat layouts.
    layouts: Arc<dyn SeatLayoutStore>,
    /// Versioned seat writer.
    committer: SeatCommitter,
    /// Assignment log writer.
    logger: AssignmentLogger,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(
        attendees: Arc<dyn AttendeeStore>,
        layouts: Arc<dyn SeatLayoutStore>,
        committer: SeatCommitter,
        logger: AssignmentLogger,
    ) -> Self {
        Self {
            attendees,
            layouts,
            committer,
            logger,
        }
    }

    /// Handle one seat-assignment request.
    pub async fn register(&self, req: RegistrationRequest) -> AppResult<RegistrationOutcome> {
        let started = Instant::now();
        let req = req.normalized();
        let session_ref = Uuid::parse_str(&req.session_id).ok();

        if let Err(errors) = req.validate() {
            let message = validation_message(&errors);
            let mut entry = Self::base_entry(&req, session_ref, started);
            entry.error_message = Some(message.clone());
            self.logger.record(entry).await;
            return Err(AppError::validation(message));
        }

        let Some(session_id) = session_ref else {
            let message = format!("Session id is not a valid UUID: '{}'", req.session_id);
            let mut entry = Self::base_entry(&req, None, started);
            entry.error_message = Some(message.clone());
            self.logger.record(entry).await;
            return Err(AppError::validation(message));
        };

        let found = match self
            .attendees
            .find_by_identity(session_id, &req.phone, &req.name)
            .await
        {
            Ok(found) => found,
            Err(e) => {
                return Err(self
                    .log_store_failure(&req, Some(session_id), None, started, e)
                    .await);
            }
        };

        let Some(attendee) = found else {
            let message = "You are not on the registration list. Please check your phone number and name.";
            let mut entry = Self::base_entry(&req, Some(session_id), started);
            entry.error_message = Some(message.to_string());
            self.logger.record(entry).await;
            return Err(AppError::not_registered(message));
        };

        // Idempotent replay: committed seats are returned as-is, and the
        // version is left untouched.
        if attendee.is_assigned() {
            let mut entry = Self::base_entry(&req, Some(session_id), started);
            entry.attendee_id = Some(attendee.id);
            entry.assigned_seats = attendee.seat_number.clone();
            entry.event = AssignmentEvent::Retry;
            entry.version_attempted = Some(attendee.version);
            entry.version_final = Some(attendee.version);
            self.logger.record(entry).await;
            info!(
                attendee_id = %attendee.id,
                seats = ?attendee.seat_number,
                "Returning previously assigned seats"
            );
            return Ok(RegistrationOutcome {
                attendee,
                already_assigned: true,
            });
        }

        let rows = match self.layouts.list_active_rows(session_id).await {
            Ok(rows) => rows,
            Err(e) => {
                return Err(self
                    .log_store_failure(&req, Some(session_id), Some(&attendee), started, e)
                    .await);
            }
        };

        let assigned = match self.attendees.list_assigned(session_id).await {
            Ok(assigned) => assigned,
            Err(e) => {
                return Err(self
                    .log_store_failure(&req, Some(session_id), Some(&attendee), started, e)
                    .await);
            }
        };
        let occupied: HashSet<SeatId> = assigned.iter().flat_map(Attendee::seat_ids).collect();

        // Validation has already pinned the count to >= 1.
        match allocator::select_seats(req.attendee_count as u32, &rows, &occupied) {
            SeatSelection::Insufficient { available } => {
                let message = format!(
                    "Not enough seats available: {} requested, {} remaining",
                    req.attendee_count, available
                );
                let mut entry = Self::base_entry(&req, Some(session_id), started);
                entry.attendee_id = Some(attendee.id);
                entry.version_attempted = Some(attendee.version);
                entry.error_message = Some(message.clone());
                self.logger.record(entry).await;
                warn!(
                    attendee_id = %attendee.id,
                    requested = req.attendee_count,
                    available,
                    "Seat pool exhausted"
                );
                Err(AppError::insufficient_seats(message))
            }
            SeatSelection::Assigned(seats) => self
                .commit_selection(&req, session_id, attendee, seats, started)
                .await,
        }
    }

    /// Commit the selected seats and log whichever way it goes.
    async fn commit_selection(
        &self,
        req: &RegistrationRequest,
        session_id: Uuid,
        attendee: Attendee,
        seats: Vec<SeatId>,
        started: Instant,
    ) -> AppResult<RegistrationOutcome> {
        match self.committer.commit(&attendee, &seats).await {
            Err(e) => Err(self
                .log_store_failure(req, Some(session_id), Some(&attendee), started, e)
                .await),
            Ok(CommitOutcome::Conflict) => {
                let mut entry = Self::base_entry(req, Some(session_id), started);
                entry.attendee_id = Some(attendee.id);
                entry.assigned_seats = Some(SeatCommitter::render_seats(&seats));
                entry.event = AssignmentEvent::Conflict;
                entry.version_attempted = Some(attendee.version);
                entry.error_message =
                    Some(format!("Version conflict at version {}", attendee.version));
                self.logger.record(entry).await;
                warn!(
                    attendee_id = %attendee.id,
                    version = attendee.version,
                    "Seat commit lost to a concurrent request"
                );
                Err(AppError::conflict(
                    "Seats were just assigned by another request. Please try again.",
                ))
            }
            Ok(CommitOutcome::Committed(updated)) => {
                let mut entry = Self::base_entry(req, Some(session_id), started);
                entry.attendee_id = Some(updated.id);
                entry.assigned_seats = updated.seat_number.clone();
                entry.event = AssignmentEvent::Success;
                entry.version_attempted = Some(attendee.version);
                entry.version_final = Some(updated.version);
                self.logger.record(entry).await;
                info!(
                    attendee_id = %updated.id,
                    seats = ?updated.seat_number,
                    version = updated.version,
                    "Seats committed"
                );
                Ok(RegistrationOutcome {
                    attendee: updated,
                    already_assigned: false,
                })
            }
        }
    }

    /// Log a store failure and hand the error back for propagation.
    async fn log_store_failure(
        &self,
        req: &RegistrationRequest,
        session_id: Option<Uuid>,
        attendee: Option<&Attendee>,
        started: Instant,
        error: AppError,
    ) -> AppError {
        let mut entry = Self::base_entry(req, session_id, started);
        if let Some(attendee) = attendee {
            entry.attendee_id = Some(attendee.id);
            entry.version_attempted = Some(attendee.version);
        }
        entry.error_message = Some(error.message.clone());
        self.logger.record(entry).await;
        error
    }

    /// Log entry skeleton shared by every branch. Defaults to an `error`
    /// event; outcome branches overwrite what they know.
    fn base_entry(
        req: &RegistrationRequest,
        session_id: Option<Uuid>,
        started: Instant,
    ) -> CreateAssignmentLogEntry {
        CreateAssignmentLogEntry {
            session_id,
            attendee_id: None,
            attendee_name: req.name.clone(),
            attendee_phone: req.phone.clone(),
            requested_count: req.attendee_count,
            assigned_seats: None,
            event: AssignmentEvent::Error,
            error_message: None,
            version_attempted: None,
            version_final: None,
            processing_time_ms: elapsed_ms(started),
        }
    }
}

fn elapsed_ms(started: Instant) -> i64 {
    i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX)
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let length_ok = (10..=11).contains(&phone.chars().count());
    if length_ok && phone.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    let mut error = ValidationError::new("phone");
    error.message = Some("Phone number must be 10 or 11 digits".into());
    Err(error)
}

/// Collapse field errors into one deterministic message.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let detail = error
                .message
                .clone()
                .unwrap_or_else(|| error.code.clone());
            parts.push(format!("{field}: {detail}"));
        }
    }
    parts.sort();
    parts.join("; ")
}
