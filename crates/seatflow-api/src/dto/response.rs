//! Response DTOs.

use serde::{Deserialize, Serialize};

use seatflow_entity::attendee::Attendee;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response body for the registration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    /// Always `true`; errors never reach this type.
    pub success: bool,
    /// Present (and `true`) when a previous request already committed
    /// these seats and the call was an idempotent replay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_assigned: Option<bool>,
    /// The attendee record after the call.
    pub data: Attendee,
}

impl RegistrationResponse {
    /// Response for a fresh assignment.
    pub fn assigned(attendee: Attendee) -> Self {
        Self {
            success: true,
            already_assigned: None,
            data: attendee,
        }
    }

    /// Response for an idempotent replay.
    pub fn replayed(attendee: Attendee) -> Self {
        Self {
            success: true,
            already_assigned: Some(true),
            data: attendee,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
