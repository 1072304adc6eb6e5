//! # seatflow-service
//!
//! Business logic service layer for Seatflow. Each service orchestrates
//! the store traits to implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod allocation;
pub mod seatmap;

pub use allocation::{
    AssignmentLogger, CommitOutcome, RegistrationOutcome, RegistrationRequest,
    RegistrationService, SeatCommitter, SeatSelection,
};
pub use seatmap::SeatMapService;
