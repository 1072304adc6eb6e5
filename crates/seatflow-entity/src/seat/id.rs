//! Typed seat identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use seatflow_core::AppError;

/// A single physical seat, identified by row letter and 1-based index.
///
/// Renders as `"A-01"` (row letter, dash, zero-padded index). Parsing
/// accepts unpadded historical values such as `"A-1"` and lowercase row
/// letters; re-rendering always normalizes. Ordering is by row letter,
/// then index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    /// Row letter (`'A'`..=`'Z'`).
    pub row: char,
    /// Seat index within the row (1-based).
    pub index: u16,
}

impl SeatId {
    /// Create a new seat id. The row letter is normalized to uppercase.
    pub fn new(row: char, index: u16) -> Self {
        Self {
            row: row.to_ascii_uppercase(),
            index,
        }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.row, self.index)
    }
}

impl FromStr for SeatId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation(format!("Invalid seat id: '{s}'"));

        let trimmed = s.trim();
        let (row_part, index_part) = trimmed.split_once('-').ok_or_else(invalid)?;

        let mut chars = row_part.chars();
        let row = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return Err(invalid()),
        };

        if index_part.is_empty() || index_part.len() > 3 {
            return Err(invalid());
        }
        let index: u16 = index_part.parse().map_err(|_| invalid())?;
        if index == 0 {
            return Err(invalid());
        }

        Ok(Self { row, index })
    }
}

impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
