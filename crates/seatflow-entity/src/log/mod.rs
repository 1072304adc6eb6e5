//! Assignment log domain entities.

pub mod event;
pub mod model;

pub use event::AssignmentEvent;
pub use model::{AssignmentLogEntry, CreateAssignmentLogEntry};
