//! Seat allocation and the registration flow.

pub mod allocator;
pub mod committer;
pub mod logger;
pub mod service;

pub use allocator::{seat_space, select_seats, SeatSelection};
pub use committer::{CommitOutcome, SeatCommitter};
pub use logger::AssignmentLogger;
pub use service::{RegistrationOutcome, RegistrationRequest, RegistrationService};
