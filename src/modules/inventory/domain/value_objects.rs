use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of stock movement. Purchases, returns and adjustments add to
/// stock; sales draw it down.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionKind"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Purchase,
    Sale,
    Return,
    Adjustment,
}

impl TransactionKind {
    /// Stock delta this movement applies for the given quantity.
    pub fn stock_delta(&self, quantity: i32) -> i32 {
        match self {
            TransactionKind::Purchase | TransactionKind::Return | TransactionKind::Adjustment => {
                quantity
            }
            TransactionKind::Sale => -quantity,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransactionKind::Purchase => write!(f, "PURCHASE"),
            TransactionKind::Sale => write!(f, "SALE"),
            TransactionKind::Return => write!(f, "RETURN"),
            TransactionKind::Adjustment => write!(f, "ADJUSTMENT"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PURCHASE" => Ok(TransactionKind::Purchase),
            "SALE" => Ok(TransactionKind::Sale),
            "RETURN" => Ok(TransactionKind::Return),
            "ADJUSTMENT" => Ok(TransactionKind::Adjustment),
            _ => Err(format!("Invalid transaction kind: {}", s)),
        }
    }
}
