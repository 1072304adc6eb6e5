//! HTTP request handlers, organized by domain.

pub mod attendee;
pub mod health;
pub mod logs;
pub mod registration;
pub mod session;
