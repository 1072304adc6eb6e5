//! Assignment log writer.

use std::sync::Arc;

use tracing::warn;

use seatflow_database::store::AssignmentLogStore;
use seatflow_entity::log::CreateAssignmentLogEntry;

/// Appends assignment log entries without ever failing the request.
#[derive(Clone)]
pub struct AssignmentLogger {
    /// Append-only log store.
    logs: Arc<dyn AssignmentLogStore>,
}

impl AssignmentLogger {
    /// Creates a new logger.
    pub fn new(logs: Arc<dyn AssignmentLogStore>) -> Self {
        Self { logs }
    }

    /// Append one entry.
    ///
    /// Append failures are traced and swallowed. The caller's response
    /// must not change because the audit write failed.
    pub async fn record(&self, entry: CreateAssignmentLogEntry) {
        if let Err(e) = self.logs.append(&entry).await {
            warn!(
                error = %e,
                event = %entry.event,
                attendee = %entry.attendee_name,
                "Failed to append assignment log entry"
            );
        }
    }
}
