//! Calendar-day helpers.
//!
//! Due/overdue classification works on UTC calendar days, never on raw
//! timestamps: a job due at 23:59 today must not read as overdue to a
//! check running at 00:01 the same day.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Truncate a timestamp to its UTC calendar day.
pub fn date_only(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Midnight UTC of the given calendar day.
pub fn at_midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc()
}

/// True when two timestamps fall on the same UTC calendar day.
pub fn is_same_date(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    date_only(a) == date_only(b)
}

/// Day-precision containment check, inclusive of both endpoints.
pub fn is_within_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// First day of the month the given day belongs to.
pub fn start_of_month(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1).expect("first of month is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn date_only_drops_time_of_day() {
        assert_eq!(date_only(ts("2025-06-01T23:59:59Z")), day("2025-06-01"));
        assert_eq!(date_only(ts("2025-06-01T00:00:01Z")), day("2025-06-01"));
    }

    #[test]
    fn same_day_timestamps_compare_equal() {
        assert!(is_same_date(
            ts("2025-06-01T01:00:00Z"),
            ts("2025-06-01T22:30:00Z")
        ));
        assert!(!is_same_date(
            ts("2025-06-01T23:59:59Z"),
            ts("2025-06-02T00:00:00Z")
        ));
    }

    #[test]
    fn range_includes_both_endpoints() {
        let start = day("2025-06-01");
        let end = day("2025-07-01");
        assert!(is_within_range(start, start, end));
        assert!(is_within_range(end, start, end));
        assert!(is_within_range(day("2025-06-15"), start, end));
        assert!(!is_within_range(day("2025-05-31"), start, end));
        assert!(!is_within_range(day("2025-07-02"), start, end));
    }

    #[test]
    fn start_of_month_resets_day() {
        assert_eq!(start_of_month(day("2025-06-17")), day("2025-06-01"));
        assert_eq!(start_of_month(day("2025-06-01")), day("2025-06-01"));
    }
}
