//! Pure seat-selection logic.
//!
//! Works entirely on in-memory snapshots: the caller supplies the layout
//! rows and the set of occupied seats, and gets back either a concrete
//! seat list or an insufficiency verdict. Nothing here touches a store.

use std::collections::HashSet;

use seatflow_entity::seat::{SeatId, SeatRow};

/// Outcome of a seat-selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatSelection {
    /// Seats were found for the whole party, in assignment order.
    Assigned(Vec<SeatId>),
    /// Fewer seats remain than the party needs.
    Insufficient {
        /// Number of seats currently unoccupied.
        available: usize,
    },
}

/// Build the ordered seat space for the given rows.
///
/// Rows contribute seats front to back (display order, then row label),
/// each row in index order. Inactive rows and rows whose label is not a
/// single letter contribute nothing.
pub fn seat_space(rows: &[SeatRow]) -> Vec<SeatId> {
    let mut ordered: Vec<&SeatRow> = rows.iter().filter(|r| r.is_active).collect();
    ordered.sort_by(|a, b| (a.display_order, &a.row_label).cmp(&(b.display_order, &b.row_label)));
    ordered.iter().flat_map(|r| r.seats()).collect()
}

/// Select seats for a party of `requested`.
///
/// Selection order:
/// 1. with fewer free seats than requested, report insufficiency and
///    assign nothing;
/// 2. a party of one takes the first free seat;
/// 3. otherwise the earliest run of strictly consecutive free seats
///    within a single row wins;
/// 4. with no such run, the first `requested` free seats are taken even
///    though they may be scattered across rows.
pub fn select_seats(requested: u32, rows: &[SeatRow], occupied: &HashSet<SeatId>) -> SeatSelection {
    let available: Vec<SeatId> = seat_space(rows)
        .into_iter()
        .filter(|seat| !occupied.contains(seat))
        .collect();

    let requested = requested as usize;
    if available.len() < requested {
        return SeatSelection::Insufficient {
            available: available.len(),
        };
    }

    if requested == 1 {
        return SeatSelection::Assigned(vec![available[0]]);
    }

    if let Some(run) = first_consecutive_run(&available, requested) {
        return SeatSelection::Assigned(run);
    }

    SeatSelection::Assigned(available[..requested].to_vec())
}

/// Find the earliest run of `len` free seats with strictly consecutive
/// indices inside one row. `available` must be in seat-space order.
fn first_consecutive_run(available: &[SeatId], len: usize) -> Option<Vec<SeatId>> {
    if len < 2 {
        return None;
    }

    let mut start = 0;
    while start < available.len() {
        let row = available[start].row;
        let mut end = start + 1;
        while end < available.len() && available[end].row == row {
            end += 1;
        }

        for window in available[start..end].windows(len) {
            if window.windows(2).all(|pair| pair[1].index == pair[0].index + 1) {
                return Some(window.to_vec());
            }
        }

        start = end;
    }

    None
}
