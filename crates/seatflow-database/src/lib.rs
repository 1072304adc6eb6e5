//! # seatflow-database
//!
//! PostgreSQL connection management, the store traits the service layer
//! talks to, concrete repository implementations, and in-memory stores
//! for tests and local experiments.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{
    AssignmentLogStore, AssignmentLogSummary, AttendeeStore, AttendeeTotals, SeatLayoutStore,
    SessionStore,
};
