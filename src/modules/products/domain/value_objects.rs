use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maintenance cadence of a product. Drives generation of follow-up
/// service jobs when the product is sold.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ServiceFrequency"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceFrequency {
    None,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl ServiceFrequency {
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceFrequency::None => "No Servicing",
            ServiceFrequency::Quarterly => "Quarterly",
            ServiceFrequency::HalfYearly => "Half-Yearly",
            ServiceFrequency::Yearly => "Yearly",
        }
    }

    /// Months between maintenance visits; `None` when the product needs
    /// no servicing.
    pub fn interval_months(&self) -> Option<u32> {
        match self {
            ServiceFrequency::None => None,
            ServiceFrequency::Quarterly => Some(3),
            ServiceFrequency::HalfYearly => Some(6),
            ServiceFrequency::Yearly => Some(12),
        }
    }

    pub fn requires_servicing(&self) -> bool {
        !matches!(self, ServiceFrequency::None)
    }
}

impl Default for ServiceFrequency {
    fn default() -> Self {
        ServiceFrequency::None
    }
}

impl fmt::Display for ServiceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ServiceFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" | "" => Ok(ServiceFrequency::None),
            "QUARTERLY" => Ok(ServiceFrequency::Quarterly),
            "HALF_YEARLY" | "HALFYEARLY" | "HALF-YEARLY" => Ok(ServiceFrequency::HalfYearly),
            "YEARLY" | "ANNUAL" => Ok(ServiceFrequency::Yearly),
            _ => Err(format!("Invalid service frequency: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "quarterly".parse::<ServiceFrequency>().unwrap(),
            ServiceFrequency::Quarterly
        );
        assert_eq!(
            "Half_Yearly".parse::<ServiceFrequency>().unwrap(),
            ServiceFrequency::HalfYearly
        );
        assert_eq!(
            "YEARLY".parse::<ServiceFrequency>().unwrap(),
            ServiceFrequency::Yearly
        );
        assert!("weekly".parse::<ServiceFrequency>().is_err());
    }

    #[test]
    fn interval_months_per_cadence() {
        assert_eq!(ServiceFrequency::None.interval_months(), None);
        assert_eq!(ServiceFrequency::Quarterly.interval_months(), Some(3));
        assert_eq!(ServiceFrequency::HalfYearly.interval_months(), Some(6));
        assert_eq!(ServiceFrequency::Yearly.interval_months(), Some(12));
    }
}
