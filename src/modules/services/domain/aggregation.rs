//! Count summaries over service job collections.
//!
//! Buckets are always re-derived against the current "today" through
//! the status rules; a job persisted as DUE yesterday counts as OVERDUE
//! today. Only the visit-axis buckets read stored state, since that
//! axis is not time-dependent.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::entities::ServiceJob;
use super::value_objects::{ServiceDueStatus, ServiceVisitStatus};
use crate::shared::utils::dates::{date_only, is_within_range};

/// Width of the "due soon" window, endpoints inclusive.
pub const DUE_SOON_WINDOW_DAYS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCounts {
    pub total: i64,
    pub due: i64,
    pub overdue: i64,
    pub unscheduled: i64,
    pub planned: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub due_in_30_days: i64,
}

/// Classify a collection of jobs as of `today`.
///
/// The due-in-30-days bucket counts open jobs whose due date falls in
/// `[today, today + 30]`, both endpoints inclusive. Already-overdue
/// jobs sit before the window and are excluded by construction; they
/// are surfaced by the overdue bucket instead.
pub fn tally_service_jobs(jobs: &[ServiceJob], today: NaiveDate) -> ServiceCounts {
    let window_end = today + Days::new(DUE_SOON_WINDOW_DAYS);
    let mut counts = ServiceCounts::default();

    for job in jobs {
        counts.total += 1;

        match job.effective_due_status(today) {
            Some(ServiceDueStatus::Due) => counts.due += 1,
            Some(ServiceDueStatus::Overdue) => counts.overdue += 1,
            None => {}
        }

        match job.service_visit_status {
            ServiceVisitStatus::Unscheduled => counts.unscheduled += 1,
            ServiceVisitStatus::Planned => counts.planned += 1,
            ServiceVisitStatus::Completed => counts.completed += 1,
            ServiceVisitStatus::Cancelled => counts.cancelled += 1,
        }

        if !job.service_visit_status.is_terminal() {
            if let Some(due) = job.service_due_date {
                if is_within_range(date_only(due), today, window_end) {
                    counts.due_in_30_days += 1;
                }
            }
        }
    }

    counts
}

/// True when the job's due date falls inside the due-soon window as of
/// `today` and the job is still open.
pub fn is_due_soon(job: &ServiceJob, today: NaiveDate) -> bool {
    if job.service_visit_status.is_terminal() {
        return false;
    }
    match job.service_due_date {
        Some(due) => is_within_range(date_only(due), today, today + Days::new(DUE_SOON_WINDOW_DAYS)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn midnight(s: &str) -> DateTime<Utc> {
        day(s).and_hms_opt(0, 0, 0).unwrap().and_utc()
    }

    fn job(due: Option<&str>, visit: ServiceVisitStatus) -> ServiceJob {
        let now = midnight("2025-06-01");
        ServiceJob {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            customer_product_id: None,
            engineer_id: None,
            sale_id: None,
            visit_scheduled_date: None,
            service_due_date: due.map(midnight),
            service_visit_status: visit,
            service_due_status: None,
            job_type: None,
            warranty_status: None,
            problem_description: None,
            resolution_notes: None,
            billed_amount: None,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn overdue_and_due_are_disjoint() {
        // One job due yesterday, one due in ten days, both planned.
        let jobs = vec![
            job(Some("2025-05-31"), ServiceVisitStatus::Planned),
            job(Some("2025-06-11"), ServiceVisitStatus::Planned),
        ];
        let counts = tally_service_jobs(&jobs, day("2025-06-01"));

        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.due, 1);
        // The overdue job sits before the window and stays out of the
        // due-soon bucket; the ten-day job is inside it.
        assert_eq!(counts.due_in_30_days, 1);
        assert_eq!(counts.planned, 2);
        assert_eq!(counts.total, 2);
    }

    #[test]
    fn stale_persisted_due_status_is_ignored() {
        let mut stale = job(Some("2025-05-20"), ServiceVisitStatus::Planned);
        // Persisted as DUE back when that was true.
        stale.service_due_status = Some(ServiceDueStatus::Due);

        let counts = tally_service_jobs(&[stale], day("2025-06-01"));
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.due, 0);
    }

    #[test]
    fn terminal_jobs_never_count_toward_due_buckets() {
        let jobs = vec![
            job(Some("2025-06-10"), ServiceVisitStatus::Completed),
            job(Some("2025-05-01"), ServiceVisitStatus::Cancelled),
        ];
        let counts = tally_service_jobs(&jobs, day("2025-06-01"));

        assert_eq!(counts.due, 0);
        assert_eq!(counts.overdue, 0);
        assert_eq!(counts.due_in_30_days, 0);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.cancelled, 1);
    }

    #[test]
    fn due_soon_window_includes_both_endpoints() {
        let today = day("2025-06-01");
        assert!(is_due_soon(
            &job(Some("2025-06-01"), ServiceVisitStatus::Unscheduled),
            today
        ));
        assert!(is_due_soon(
            &job(Some("2025-07-01"), ServiceVisitStatus::Unscheduled),
            today
        ));
        assert!(!is_due_soon(
            &job(Some("2025-07-02"), ServiceVisitStatus::Unscheduled),
            today
        ));
        // Yesterday is outside the window: overdue, not due-soon.
        assert!(!is_due_soon(
            &job(Some("2025-05-31"), ServiceVisitStatus::Planned),
            today
        ));
    }
}
