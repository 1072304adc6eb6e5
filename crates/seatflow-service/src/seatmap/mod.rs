//! Seat map and session statistics assembly.

pub mod service;

pub use service::{SeatMap, SeatMapRow, SeatMapService, SeatStatus, SessionStats};
