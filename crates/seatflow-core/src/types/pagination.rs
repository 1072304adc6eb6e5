//! Paging for the assignment-log view.
//!
//! The log endpoint is the only paginated surface in Seatflow, so the
//! defaults are sized for its admin screen: twenty entries per page,
//! capped at one hundred.

use serde::{Deserialize, Serialize};

/// Page size when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u64 = 20;
/// Hard cap on the page size a caller can request.
pub const MAX_PER_PAGE: u64 = 100;

/// A validated window over a log listing.
///
/// Construction clamps out-of-range input, so a `PageRequest` always
/// describes a usable `LIMIT`/`OFFSET` pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Clamp raw caller input into a valid window.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// 1-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Entries per page.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// The `LIMIT` value, in the signed form sqlx binds.
    pub fn sql_limit(&self) -> i64 {
        self.per_page as i64
    }

    /// The `OFFSET` value, in the signed form sqlx binds.
    pub fn sql_offset(&self) -> i64 {
        ((self.page - 1) * self.per_page) as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus enough shape for the log screen's pager.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    /// The entries on this page, newest first.
    pub items: Vec<T>,
    /// 1-based page number this window covers.
    pub page: u64,
    /// Entries per page.
    pub per_page: u64,
    /// Matching entries across all pages.
    pub total_items: u64,
    /// Pages needed for all matches; at least 1, even with no matches.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Wrap one page of items with the window that produced it.
    pub fn new(items: Vec<T>, total_items: u64, request: &PageRequest) -> Self {
        Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total_items,
            total_pages: total_items.div_ceil(request.per_page()).max(1),
        }
    }
}
