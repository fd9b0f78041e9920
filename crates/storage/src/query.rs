//! Store-Level Query Specifications
//!
//! The query composer upstairs translates external parameters into these;
//! the collections execute them.

use chrono::{DateTime, Utc};

/// Predicate over the record collection
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFilter {
    /// Every record
    All,
    /// Half-open interval on `recordedAt`: start inclusive, end exclusive
    RecordedWithin {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Exact, case-sensitive match on the station label
    Station(String),
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    RecordedAtDesc,
    RecordedAtAsc,
    /// Store's natural (insertion) order
    Unsorted,
}

/// A composed filter/sort/limit specification
#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery {
    pub filter: RecordFilter,
    pub sort: SortOrder,
    /// `None` means all matching records, not a default page size
    pub limit: Option<usize>,
}
