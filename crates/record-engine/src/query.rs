//! Query Composition
//!
//! Translates external query parameters into store-level
//! filter/sort/limit specifications.

use chrono::{Duration, NaiveDate, NaiveTime};
use storage::{RecordFilter, RecordQuery, SortOrder};

use crate::error::ServiceError;

/// Unbounded listing, newest first
///
/// A limit applies only when the caller supplies a positive integer;
/// zero or negative passes through as "all records".
pub fn list_all(limit: Option<i64>) -> RecordQuery {
    RecordQuery {
        filter: RecordFilter::All,
        sort: SortOrder::RecordedAtDesc,
        limit: limit.filter(|n| *n > 0).map(|n| n as usize),
    }
}

/// Single calendar day, ascending within the day
///
/// The interval is half-open: `[startOfDay, startOfDay + 1 day)` in UTC.
/// An unparseable date is a client-input error.
pub fn for_date(date: &str) -> Result<RecordQuery, ServiceError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        ServiceError::InvalidInput(format!(
            "Unparseable date: {:?} (expected YYYY-MM-DD)",
            date
        ))
    })?;

    let start = day.and_time(NaiveTime::MIN).and_utc();
    Ok(RecordQuery {
        filter: RecordFilter::RecordedWithin {
            start,
            end: start + Duration::days(1),
        },
        sort: SortOrder::RecordedAtAsc,
        limit: None,
    })
}

/// Exact, case-sensitive station match, store's natural order
pub fn for_station(name: &str) -> RecordQuery {
    RecordQuery {
        filter: RecordFilter::Station(name.to_string()),
        sort: SortOrder::Unsorted,
        limit: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_list_all_limit_policy() {
        assert_eq!(list_all(None).limit, None);
        assert_eq!(list_all(Some(5)).limit, Some(5));
        assert_eq!(list_all(Some(0)).limit, None);
        assert_eq!(list_all(Some(-3)).limit, None);
        assert_eq!(list_all(None).sort, SortOrder::RecordedAtDesc);
    }

    #[test]
    fn test_for_date_half_open_interval() {
        let query = for_date("2025-12-04").unwrap();
        assert_eq!(
            query.filter,
            RecordFilter::RecordedWithin {
                start: Utc.with_ymd_and_hms(2025, 12, 4, 0, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2025, 12, 5, 0, 0, 0).unwrap(),
            }
        );
        assert_eq!(query.sort, SortOrder::RecordedAtAsc);
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_for_date_rejects_garbage() {
        for bad in ["04-12-2025", "2025-13-01", "today", "2025-12-04T00:00:00Z"] {
            assert!(matches!(
                for_date(bad),
                Err(ServiceError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_for_station_exact_match_unsorted() {
        let query = for_station("Oslo North");
        assert_eq!(query.filter, RecordFilter::Station("Oslo North".to_string()));
        assert_eq!(query.sort, SortOrder::Unsorted);
    }
}
