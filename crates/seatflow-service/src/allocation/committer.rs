//! Versioned seat commit.

use std::sync::Arc;

use seatflow_core::result::AppResult;
use seatflow_database::store::AttendeeStore;
use seatflow_entity::attendee::Attendee;
use seatflow_entity::seat::SeatId;

/// Outcome of a versioned commit attempt.
#[derive(Debug, Clone)]
pub enum CommitOutcome {
    /// The write landed; the updated record carries the bumped version.
    Committed(Attendee),
    /// Another request updated the record first. Nothing was written.
    Conflict,
}

/// Writes seat assignments with optimistic concurrency.
///
/// The commit is a single conditional update on `(id, version)`, with no
/// retry loop: on conflict the caller reports back and the attendee
/// resubmits, which then replays their committed seats.
///
/// Occupancy is snapshotted before committing, so requests for two
/// *different* attendees can interleave and land on the same physical
/// seat. The version guard only serializes writers of one record.
#[derive(Clone)]
pub struct SeatCommitter {
    /// Attendee store holding the versioned records.
    attendees: Arc<dyn AttendeeStore>,
}

impl SeatCommitter {
    /// Creates a new committer.
    pub fn new(attendees: Arc<dyn AttendeeStore>) -> Self {
        Self { attendees }
    }

    /// Render a seat list the way it is stored and displayed.
    pub fn render_seats(seats: &[SeatId]) -> String {
        seats
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Attempt to commit `seats` against the version the caller read.
    pub async fn commit(&self, attendee: &Attendee, seats: &[SeatId]) -> AppResult<CommitOutcome> {
        let rendered = Self::render_seats(seats);
        match self
            .attendees
            .commit_seats(attendee.id, attendee.version, &rendered)
            .await?
        {
            Some(updated) => Ok(CommitOutcome::Committed(updated)),
            None => Ok(CommitOutcome::Conflict),
        }
    }
}
