use chrono::{DateTime, NaiveDate, Utc};

use super::dates::date_only;

/// Source of "now" for everything that classifies records against the
/// current date. Services receive it as an explicit dependency so tests
/// and demo mode can pin time instead of reading the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC calendar day. Every due/overdue comparison goes
    /// through this rather than through `now()` directly.
    fn today(&self) -> NaiveDate {
        date_only(self.now())
    }
}

/// Wall-clock time, used in normal operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for demo mode and test fixtures.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Freeze the clock at midnight UTC of the given day.
    pub fn on_day(day: NaiveDate) -> Self {
        Self(day.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let clock = FixedClock::on_day(day);
        assert_eq!(clock.today(), day);
    }

    #[test]
    fn today_truncates_time_of_day() {
        let instant = "2025-03-14T23:59:59Z".parse::<DateTime<Utc>>().unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }
}
