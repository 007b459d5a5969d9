use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminates line items and stock movements between sellable
/// products and spare parts. Shared by sales, service jobs and
/// inventory transactions.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ItemType"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Product,
    SparePart,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ItemType::Product => write!(f, "PRODUCT"),
            ItemType::SparePart => write!(f, "SPARE_PART"),
        }
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRODUCT" => Ok(ItemType::Product),
            "SPARE_PART" | "SPAREPART" => Ok(ItemType::SparePart),
            _ => Err(format!("Invalid item type: {}", s)),
        }
    }
}
