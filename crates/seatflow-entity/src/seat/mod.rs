//! Seat domain entities.

pub mod id;
pub mod row;

pub use id::SeatId;
pub use row::{CreateSeatRow, SeatRow};
