//! # seatflow-entity
//!
//! Domain entity models for Seatflow. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod attendee;
pub mod log;
pub mod seat;
pub mod session;
