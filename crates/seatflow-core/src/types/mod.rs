//! Core type definitions used across the Seatflow workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
