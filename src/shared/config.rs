//! Environment-driven configuration.
//!
//! `DATABASE_URL` selects the Postgres instance. `DEMO_MODE=true` pins
//! the application clock to `DEMO_TODAY` (YYYY-MM-DD) so seeded fixtures
//! classify the same way on every run.

use std::env;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::clock::{Clock, FixedClock, SystemClock};
use crate::{log_info, log_warn};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub demo_mode: bool,
    pub demo_today: Option<NaiveDate>,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let database_url = Self::get_validated_database_url()?;

        let demo_mode = env::var("DEMO_MODE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let demo_today = match env::var("DEMO_TODAY") {
            Ok(raw) => Some(raw.parse::<NaiveDate>().map_err(|e| {
                AppError::ConfigError(format!("DEMO_TODAY must be YYYY-MM-DD: {}", e))
            })?),
            Err(_) => None,
        };

        if demo_mode {
            log_info!(
                "DEMO MODE: clock pinned to {}",
                demo_today
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "today (no DEMO_TODAY set)".to_string())
            );
        }

        Ok(Self {
            database_url,
            demo_mode,
            demo_today,
        })
    }

    /// The clock every status-computing service receives. Demo mode gets
    /// a frozen clock; normal operation reads the wall clock.
    pub fn clock(&self) -> Arc<dyn Clock> {
        match (self.demo_mode, self.demo_today) {
            (true, Some(day)) => Arc::new(FixedClock::on_day(day)),
            (true, None) => {
                log_warn!("DEMO_MODE set without DEMO_TODAY; falling back to system clock");
                Arc::new(SystemClock)
            }
            _ => Arc::new(SystemClock),
        }
    }

    /// Validate and retrieve database URL with basic sanity checks
    fn get_validated_database_url() -> AppResult<String> {
        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?;

        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(AppError::ConfigError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        // Log connection target without exposing credentials
        log_info!(
            "Using database at: {}",
            database_url.split('@').last().unwrap_or("unknown_host")
        );

        Ok(database_url)
    }
}
