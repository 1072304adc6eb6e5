//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Attendee lookup request body.
///
/// Same identity triple as registration, but read-only: no seats are
/// assigned and nothing is logged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LookupRequest {
    /// Contact phone number.
    #[serde(default)]
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    /// Attendee name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Target session id.
    #[serde(default)]
    #[validate(length(min = 1, message = "Session id is required"))]
    pub session_id: String,
}

/// Query parameters for the assignment log search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogQuery {
    /// Restrict to one event kind: `success`, `conflict`, `retry`, `error`.
    pub event: Option<String>,
}
