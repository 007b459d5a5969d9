//! End-to-end exercises of the service lifecycle through the public
//! domain API: creation defaults, patch transitions, due-status
//! derivation and the count buckets, all against a pinned "today".

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use fieldserve::modules::products::domain::value_objects::ServiceFrequency;
use fieldserve::modules::services::domain::{
    aggregation::tally_service_jobs,
    cadence::{due_schedule, next_due_date},
    entities::{NewServiceJob, ServiceJob, ServiceJobPatch},
    value_objects::{ServiceDueStatus, ServiceVisitStatus},
};
use fieldserve::shared::application::patch::Field;
use fieldserve::shared::utils::clock::{Clock, FixedClock};
use fieldserve::shared::utils::dates::at_midnight;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn midnight(s: &str) -> DateTime<Utc> {
    at_midnight(day(s))
}

fn new_job(due: Option<&str>, scheduled: Option<&str>) -> NewServiceJob {
    NewServiceJob {
        customer_id: Uuid::new_v4(),
        customer_product_id: None,
        engineer_id: None,
        sale_id: None,
        visit_scheduled_date: scheduled.map(midnight),
        service_due_date: due.map(midnight),
        service_visit_status: None,
        job_type: Some("MAINTENANCE".to_string()),
        warranty_status: None,
        problem_description: None,
        resolution_notes: None,
        billed_amount: None,
        items: Vec::new(),
    }
}

#[test]
fn creation_defaults_follow_the_scheduled_date() {
    let clock = FixedClock::on_day(day("2025-03-01"));

    let unscheduled = ServiceJob::create(
        new_job(Some("2025-04-01"), None),
        clock.today(),
        clock.now(),
    );
    assert_eq!(
        unscheduled.service_visit_status,
        ServiceVisitStatus::Unscheduled
    );
    assert_eq!(unscheduled.service_due_status, Some(ServiceDueStatus::Due));

    let planned = ServiceJob::create(
        new_job(Some("2025-04-01"), Some("2025-03-20")),
        clock.today(),
        clock.now(),
    );
    assert_eq!(planned.service_visit_status, ServiceVisitStatus::Planned);
}

#[test]
fn past_dated_creation_is_born_overdue() {
    let clock = FixedClock::on_day(day("2025-06-01"));
    let job = ServiceJob::create(new_job(Some("2025-04-01"), None), clock.today(), clock.now());
    assert_eq!(job.service_due_status, Some(ServiceDueStatus::Overdue));
}

#[test]
fn completing_clears_the_due_badge_and_cancelling_too() {
    let today = day("2025-06-01");
    let now = midnight("2025-06-01");

    for terminal in [ServiceVisitStatus::Completed, ServiceVisitStatus::Cancelled] {
        let mut job =
            ServiceJob::create(new_job(Some("2025-04-01"), None), today, now);
        assert_eq!(job.service_due_status, Some(ServiceDueStatus::Overdue));

        let patch = ServiceJobPatch {
            service_visit_status: Some(terminal),
            ..Default::default()
        };
        job.apply_patch(patch, today, now);

        assert_eq!(job.service_visit_status, terminal);
        assert_eq!(job.service_due_status, None);
        assert_eq!(job.effective_due_status(today), None);
    }
}

#[test]
fn clearing_the_scheduled_date_reverts_to_unscheduled() {
    let today = day("2025-03-01");
    let now = midnight("2025-03-01");

    let mut job = ServiceJob::create(
        new_job(Some("2025-04-01"), Some("2025-03-20")),
        today,
        now,
    );
    assert_eq!(job.service_visit_status, ServiceVisitStatus::Planned);

    let patch = ServiceJobPatch {
        visit_scheduled_date: Field::Cleared,
        ..Default::default()
    };
    job.apply_patch(patch, today, now);

    assert_eq!(job.service_visit_status, ServiceVisitStatus::Unscheduled);
    assert_eq!(job.visit_scheduled_date, None);
    assert_eq!(job.service_due_status, Some(ServiceDueStatus::Due));
}

#[test]
fn setting_a_scheduled_date_plans_the_visit() {
    let today = day("2025-03-01");
    let now = midnight("2025-03-01");

    let mut job = ServiceJob::create(new_job(Some("2025-04-01"), None), today, now);
    let patch = ServiceJobPatch {
        visit_scheduled_date: Field::Set(midnight("2025-03-25")),
        ..Default::default()
    };
    job.apply_patch(patch, today, now);

    assert_eq!(job.service_visit_status, ServiceVisitStatus::Planned);
    assert_eq!(job.visit_scheduled_date, Some(midnight("2025-03-25")));
}

#[test]
fn clearing_the_due_date_clears_the_due_badge() {
    let today = day("2025-03-01");
    let now = midnight("2025-03-01");

    let mut job = ServiceJob::create(new_job(Some("2025-04-01"), None), today, now);
    let patch = ServiceJobPatch {
        service_due_date: Field::Cleared,
        ..Default::default()
    };
    job.apply_patch(patch, today, now);

    assert_eq!(job.service_due_date, None);
    assert_eq!(job.service_due_status, None);
    // The scheduling axis is unaffected.
    assert_eq!(job.service_visit_status, ServiceVisitStatus::Unscheduled);
}

#[test]
fn due_date_equal_to_today_is_due_not_overdue() {
    let today = day("2025-06-01");
    let job = ServiceJob::create(
        new_job(Some("2025-06-01"), None),
        today,
        midnight("2025-06-01"),
    );
    assert_eq!(job.service_due_status, Some(ServiceDueStatus::Due));
}

#[test]
fn invariant_terminal_jobs_carry_no_due_status() {
    let today = day("2025-06-01");
    let now = midnight("2025-06-01");

    // Whatever sequence of patches leads to a terminal state, the due
    // axis must end up absent.
    let mut job = ServiceJob::create(
        new_job(Some("2025-01-01"), Some("2025-05-01")),
        today,
        now,
    );
    job.apply_patch(
        ServiceJobPatch {
            service_due_date: Field::Set(midnight("2025-07-01")),
            ..Default::default()
        },
        today,
        now,
    );
    job.apply_patch(
        ServiceJobPatch {
            service_visit_status: Some(ServiceVisitStatus::Completed),
            resolution_notes: Some("replaced filter".to_string()),
            ..Default::default()
        },
        today,
        now,
    );

    assert!(job.service_visit_status.is_terminal());
    assert_eq!(job.service_due_status, None);
}

#[test]
fn counts_split_overdue_from_due_and_window_the_due_soon_bucket() {
    let today = day("2025-06-01");
    let now = midnight("2025-06-01");

    let yesterday = ServiceJob::create(
        new_job(Some("2025-05-31"), Some("2025-05-31")),
        today,
        now,
    );
    let in_ten_days = ServiceJob::create(
        new_job(Some("2025-06-11"), Some("2025-06-11")),
        today,
        now,
    );
    let jobs = vec![yesterday, in_ten_days];

    let counts = tally_service_jobs(&jobs, today);

    assert_eq!(counts.overdue, 1);
    assert_eq!(counts.due, 1);
    // Pinned window semantics: the overdue job's due date lies before
    // today, so it is not in the 30-day window.
    assert_eq!(counts.due_in_30_days, 1);
    assert_eq!(counts.planned, 2);
}

#[test]
fn counts_drift_as_today_moves() {
    let jobs = vec![ServiceJob::create(
        new_job(Some("2025-06-10"), None),
        day("2025-06-01"),
        midnight("2025-06-01"),
    )];

    let before = tally_service_jobs(&jobs, day("2025-06-01"));
    assert_eq!((before.due, before.overdue), (1, 0));

    // Same records, later "today": the persisted DUE must not be
    // trusted.
    let after = tally_service_jobs(&jobs, day("2025-06-15"));
    assert_eq!((after.due, after.overdue), (0, 1));
}

#[test]
fn quarterly_cadence_clamps_month_ends() {
    assert_eq!(
        next_due_date(ServiceFrequency::Quarterly, day("2025-01-31")),
        Some(day("2025-04-30"))
    );
}

#[test]
fn bulk_schedule_matches_the_sale_year() {
    let schedule = due_schedule(ServiceFrequency::HalfYearly, day("2025-01-01"));
    assert_eq!(schedule, vec![day("2025-07-01"), day("2026-01-01")]);
}

#[test]
fn patch_json_distinguishes_absent_null_and_value() {
    let cleared: ServiceJobPatch =
        serde_json::from_str(r#"{"serviceDueDate": null}"#).unwrap();
    assert!(cleared.service_due_date.is_cleared());
    assert!(cleared.visit_scheduled_date.is_omitted());

    let set: ServiceJobPatch =
        serde_json::from_str(r#"{"serviceDueDate": "2025-06-01T00:00:00Z"}"#).unwrap();
    assert_eq!(set.service_due_date, Field::Set(midnight("2025-06-01")));

    let untouched: ServiceJobPatch = serde_json::from_str("{}").unwrap();
    assert!(untouched.service_due_date.is_omitted());
    assert!(untouched.engineer_id.is_omitted());
    assert!(untouched.items.is_none());
}
