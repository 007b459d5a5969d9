//! Status transition rules for service jobs.
//!
//! Two independent axes. The visit axis tracks scheduling
//! (UNSCHEDULED -> PLANNED -> COMPLETED/CANCELLED, with PLANNED ->
//! UNSCHEDULED allowed when the scheduled date is cleared). The due
//! axis tracks whether the maintenance obligation is outstanding and is
//! fully derived: DUE or OVERDUE while the visit axis is open, absent
//! once it is terminal.

use chrono::{DateTime, NaiveDate, Utc};

use super::value_objects::{ServiceDueStatus, ServiceVisitStatus};
use crate::shared::application::patch::Field;
use crate::shared::utils::dates::date_only;

/// Creation-time default for the visit axis: a job born with a
/// scheduled date is PLANNED, otherwise UNSCHEDULED.
pub fn initial_visit_status(visit_scheduled_date: Option<DateTime<Utc>>) -> ServiceVisitStatus {
    if visit_scheduled_date.is_some() {
        ServiceVisitStatus::Planned
    } else {
        ServiceVisitStatus::Unscheduled
    }
}

/// Resolve the visit axis for an update. An explicit status in the
/// patch always wins; otherwise the scheduled-date change drives the
/// inference: setting a date means PLANNED, clearing it means
/// UNSCHEDULED, leaving it alone keeps the current status.
pub fn resolve_visit_status(
    current: ServiceVisitStatus,
    explicit: Option<ServiceVisitStatus>,
    scheduled_date: &Field<DateTime<Utc>>,
) -> ServiceVisitStatus {
    if let Some(status) = explicit {
        return status;
    }
    match scheduled_date {
        Field::Set(_) => ServiceVisitStatus::Planned,
        Field::Cleared => ServiceVisitStatus::Unscheduled,
        Field::Omitted => current,
    }
}

/// Derive the due axis. Cleared for terminal visits and for jobs
/// without a due date; otherwise OVERDUE iff the due date's calendar
/// day is strictly before today. A due date equal to today is still
/// DUE.
pub fn derive_due_status(
    visit_status: ServiceVisitStatus,
    service_due_date: Option<DateTime<Utc>>,
    today: NaiveDate,
) -> Option<ServiceDueStatus> {
    if visit_status.is_terminal() {
        return None;
    }

    service_due_date.map(|due| {
        if date_only(due) < today {
            ServiceDueStatus::Overdue
        } else {
            ServiceDueStatus::Due
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn initial_status_follows_scheduled_date() {
        assert_eq!(
            initial_visit_status(Some(ts("2025-06-01T10:00:00Z"))),
            ServiceVisitStatus::Planned
        );
        assert_eq!(initial_visit_status(None), ServiceVisitStatus::Unscheduled);
    }

    #[test]
    fn explicit_status_wins_over_date_inference() {
        // Setting a date would infer PLANNED, but the caller said
        // COMPLETED.
        let resolved = resolve_visit_status(
            ServiceVisitStatus::Planned,
            Some(ServiceVisitStatus::Completed),
            &Field::Set(ts("2025-06-01T10:00:00Z")),
        );
        assert_eq!(resolved, ServiceVisitStatus::Completed);
    }

    #[test]
    fn setting_date_infers_planned() {
        let resolved = resolve_visit_status(
            ServiceVisitStatus::Unscheduled,
            None,
            &Field::Set(ts("2025-06-01T10:00:00Z")),
        );
        assert_eq!(resolved, ServiceVisitStatus::Planned);
    }

    #[test]
    fn clearing_date_infers_unscheduled() {
        let resolved =
            resolve_visit_status(ServiceVisitStatus::Planned, None, &Field::Cleared);
        assert_eq!(resolved, ServiceVisitStatus::Unscheduled);
    }

    #[test]
    fn untouched_date_keeps_current_status() {
        let resolved =
            resolve_visit_status(ServiceVisitStatus::Planned, None, &Field::Omitted);
        assert_eq!(resolved, ServiceVisitStatus::Planned);
    }

    #[test]
    fn terminal_visit_clears_due_axis() {
        let due = Some(ts("2020-01-01T00:00:00Z"));
        assert_eq!(
            derive_due_status(ServiceVisitStatus::Completed, due, day("2025-06-01")),
            None
        );
        assert_eq!(
            derive_due_status(ServiceVisitStatus::Cancelled, due, day("2025-06-01")),
            None
        );
    }

    #[test]
    fn past_due_date_is_overdue() {
        assert_eq!(
            derive_due_status(
                ServiceVisitStatus::Planned,
                Some(ts("2025-05-31T23:59:59Z")),
                day("2025-06-01")
            ),
            Some(ServiceDueStatus::Overdue)
        );
    }

    #[test]
    fn due_date_today_is_due_not_overdue() {
        // Boundary: equal to today must not read as overdue, whatever
        // the time of day on the stored timestamp.
        assert_eq!(
            derive_due_status(
                ServiceVisitStatus::Planned,
                Some(ts("2025-06-01T00:00:01Z")),
                day("2025-06-01")
            ),
            Some(ServiceDueStatus::Due)
        );
        assert_eq!(
            derive_due_status(
                ServiceVisitStatus::Unscheduled,
                Some(ts("2025-06-01T23:59:59Z")),
                day("2025-06-01")
            ),
            Some(ServiceDueStatus::Due)
        );
    }

    #[test]
    fn future_due_date_is_due() {
        assert_eq!(
            derive_due_status(
                ServiceVisitStatus::Unscheduled,
                Some(ts("2025-07-01T00:00:00Z")),
                day("2025-06-01")
            ),
            Some(ServiceDueStatus::Due)
        );
    }

    #[test]
    fn missing_due_date_clears_due_axis() {
        assert_eq!(
            derive_due_status(ServiceVisitStatus::Planned, None, day("2025-06-01")),
            None
        );
    }

    #[test]
    fn derivation_is_idempotent() {
        let due = Some(ts("2025-05-01T12:00:00Z"));
        let today = day("2025-06-01");
        let first = derive_due_status(ServiceVisitStatus::Planned, due, today);
        let second = derive_due_status(ServiceVisitStatus::Planned, due, today);
        assert_eq!(first, second);
    }
}
