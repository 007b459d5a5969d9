use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_person_name(field: &str, name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(format!(
                "{} too long (max 255 characters)",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_mobile(mobile: &str) -> Result<(), AppError> {
        // Digits with optional leading + and common separators
        let re = Regex::new(r"^\+?[0-9][0-9\-\s]{5,14}$").unwrap();
        if !re.is_match(mobile) {
            return Err(AppError::ValidationError(
                "Mobile number must be 6-15 digits".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_sku(sku: &str) -> Result<(), AppError> {
        if sku.is_empty() {
            return Err(AppError::ValidationError("SKU cannot be empty".to_string()));
        }
        let re = Regex::new(r"^[A-Za-z0-9\-_]+$").unwrap();
        if !re.is_match(sku) {
            return Err(AppError::ValidationError(
                "SKU contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_quantity(quantity: i32) -> Result<(), AppError> {
        if quantity <= 0 {
            return Err(AppError::ValidationError(
                "Quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_amount(field: &str, amount: i32) -> Result<(), AppError> {
        if amount < 0 {
            return Err(AppError::ValidationError(format!(
                "{} cannot be negative",
                field
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_prefixed_mobiles() {
        assert!(Validator::validate_mobile("9876543210").is_ok());
        assert!(Validator::validate_mobile("+91 98765 43210").is_ok());
    }

    #[test]
    fn rejects_malformed_mobiles() {
        assert!(Validator::validate_mobile("").is_err());
        assert!(Validator::validate_mobile("12345").is_err());
        assert!(Validator::validate_mobile("not-a-number").is_err());
    }

    #[test]
    fn sku_allows_alphanumerics_dashes_underscores() {
        assert!(Validator::validate_sku("WP-1200_X").is_ok());
        assert!(Validator::validate_sku("WP 1200").is_err());
        assert!(Validator::validate_sku("").is_err());
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(Validator::validate_quantity(1).is_ok());
        assert!(Validator::validate_quantity(0).is_err());
        assert!(Validator::validate_quantity(-3).is_err());
    }
}
