//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use seatflow_core::config::AppConfig;
use seatflow_database::store::{AssignmentLogStore, AttendeeStore, SessionStore};
use seatflow_service::{RegistrationService, SeatMapService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks. Stores are held behind
/// their traits so tests can run the router over in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The seat-assignment flow.
    pub registration: Arc<RegistrationService>,
    /// Read-side seat maps and statistics.
    pub seat_maps: Arc<SeatMapService>,
    /// Attendee registration records.
    pub attendees: Arc<dyn AttendeeStore>,
    /// Append-only assignment log.
    pub logs: Arc<dyn AssignmentLogStore>,
    /// Event sessions.
    pub sessions: Arc<dyn SessionStore>,
}
