use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheduling lifecycle of a service visit. Independent from the due
/// axis: a job can be overdue with no technician assigned, and a
/// completed job carries no due badge at all.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ServiceVisitStatus"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceVisitStatus {
    Unscheduled,
    Planned,
    Completed,
    Cancelled,
}

impl ServiceVisitStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceVisitStatus::Unscheduled => "Unscheduled",
            ServiceVisitStatus::Planned => "Planned",
            ServiceVisitStatus::Completed => "Completed",
            ServiceVisitStatus::Cancelled => "Cancelled",
        }
    }

    /// Completed and cancelled visits resolve (or void) the maintenance
    /// obligation; the due axis is cleared for them.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ServiceVisitStatus::Completed | ServiceVisitStatus::Cancelled
        )
    }
}

impl fmt::Display for ServiceVisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ServiceVisitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNSCHEDULED" => Ok(ServiceVisitStatus::Unscheduled),
            "PLANNED" => Ok(ServiceVisitStatus::Planned),
            "COMPLETED" => Ok(ServiceVisitStatus::Completed),
            "CANCELLED" => Ok(ServiceVisitStatus::Cancelled),
            _ => Err(format!("Invalid visit status: {}", s)),
        }
    }
}

/// Whether the maintenance obligation is still outstanding. Fully
/// derived from the due date and "today"; absent once the visit axis is
/// terminal.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ServiceDueStatus"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceDueStatus {
    Due,
    Overdue,
}

impl fmt::Display for ServiceDueStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceDueStatus::Due => write!(f, "Due"),
            ServiceDueStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

impl FromStr for ServiceDueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DUE" => Ok(ServiceDueStatus::Due),
            "OVERDUE" => Ok(ServiceDueStatus::Overdue),
            _ => Err(format!("Invalid due status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!ServiceVisitStatus::Unscheduled.is_terminal());
        assert!(!ServiceVisitStatus::Planned.is_terminal());
        assert!(ServiceVisitStatus::Completed.is_terminal());
        assert!(ServiceVisitStatus::Cancelled.is_terminal());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "planned".parse::<ServiceVisitStatus>().unwrap(),
            ServiceVisitStatus::Planned
        );
        assert_eq!(
            "OVERDUE".parse::<ServiceDueStatus>().unwrap(),
            ServiceDueStatus::Overdue
        );
        assert!("paused".parse::<ServiceVisitStatus>().is_err());
    }
}
