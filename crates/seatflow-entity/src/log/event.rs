//! Assignment event enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The outcome class recorded for one registration gateway invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "assignment_event", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssignmentEvent {
    /// New seats were committed.
    Success,
    /// The versioned commit lost to a concurrent writer.
    Conflict,
    /// Previously assigned seats were returned unchanged.
    Retry,
    /// The request failed before or during commit.
    Error,
}

impl AssignmentEvent {
    /// Return the event as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Conflict => "conflict",
            Self::Retry => "retry",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for AssignmentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssignmentEvent {
    type Err = seatflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "conflict" => Ok(Self::Conflict),
            "retry" => Ok(Self::Retry),
            "error" => Ok(Self::Error),
            _ => Err(seatflow_core::AppError::validation(format!(
                "Invalid assignment event: '{s}'. Expected one of: success, conflict, retry, error"
            ))),
        }
    }
}
