//! Maintenance cadence arithmetic.
//!
//! Given a product's service frequency and a reference date (usually
//! the sale date), produces the follow-up due date(s). Uses
//! calendar-month addition, so month-end references clamp to the last
//! valid day of the target month instead of spilling over.

use chrono::{Months, NaiveDate};

use crate::modules::products::domain::value_objects::ServiceFrequency;

/// Single next occurrence: reference + one cadence interval. `None`
/// for products that need no servicing.
pub fn next_due_date(frequency: ServiceFrequency, reference: NaiveDate) -> Option<NaiveDate> {
    frequency
        .interval_months()
        .and_then(|months| reference.checked_add_months(Months::new(months)))
}

/// Bulk pre-scheduling variant: every occurrence within the first year
/// after the reference date. Quarterly yields four visits, half-yearly
/// two, yearly one.
pub fn due_schedule(frequency: ServiceFrequency, reference: NaiveDate) -> Vec<NaiveDate> {
    let Some(step) = frequency.interval_months() else {
        return Vec::new();
    };

    (1..=12 / step)
        .filter_map(|i| reference.checked_add_months(Months::new(step * i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn quarterly_adds_three_months() {
        assert_eq!(
            next_due_date(ServiceFrequency::Quarterly, day("2025-01-01")),
            Some(day("2025-04-01"))
        );
    }

    #[test]
    fn month_end_clamps_instead_of_spilling() {
        // Jan 31 + 3 months lands on the last valid day of April,
        // not an invalid Apr 31 and not a fixed 90-day offset.
        assert_eq!(
            next_due_date(ServiceFrequency::Quarterly, day("2025-01-31")),
            Some(day("2025-04-30"))
        );
        assert_eq!(
            next_due_date(ServiceFrequency::HalfYearly, day("2024-08-31")),
            Some(day("2025-02-28"))
        );
        // Leap-day reference, yearly cadence
        assert_eq!(
            next_due_date(ServiceFrequency::Yearly, day("2024-02-29")),
            Some(day("2025-02-28"))
        );
    }

    #[test]
    fn no_servicing_means_no_due_date() {
        assert_eq!(next_due_date(ServiceFrequency::None, day("2025-01-01")), None);
        assert!(due_schedule(ServiceFrequency::None, day("2025-01-01")).is_empty());
    }

    #[test]
    fn schedule_covers_first_year() {
        assert_eq!(
            due_schedule(ServiceFrequency::Quarterly, day("2025-01-01")),
            vec![
                day("2025-04-01"),
                day("2025-07-01"),
                day("2025-10-01"),
                day("2026-01-01"),
            ]
        );
        assert_eq!(
            due_schedule(ServiceFrequency::HalfYearly, day("2025-01-01")),
            vec![day("2025-07-01"), day("2026-01-01")]
        );
        assert_eq!(
            due_schedule(ServiceFrequency::Yearly, day("2025-01-01")),
            vec![day("2026-01-01")]
        );
    }

    #[test]
    fn inputs_are_not_mutated() {
        let reference = day("2025-01-31");
        let _ = due_schedule(ServiceFrequency::Quarterly, reference);
        assert_eq!(reference, day("2025-01-31"));
    }
}
