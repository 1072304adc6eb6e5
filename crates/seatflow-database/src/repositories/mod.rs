//! PostgreSQL repository implementations for all Seatflow stores.

pub mod assignment_log;
pub mod attendee;
pub mod seat_layout;
pub mod session;

pub use assignment_log::AssignmentLogRepository;
pub use attendee::AttendeeRepository;
pub use seat_layout::SeatLayoutRepository;
pub use session::SessionRepository;
