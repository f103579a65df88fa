//! Validation utilities for the lot creation form
//!
//! Every rejection carries an explicit reason so the caller can report it
//! instead of dropping the draft silently.

use rust_decimal::Decimal;

/// Validate a required free-text field (crop, variety)
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Field is required");
    }
    Ok(())
}

/// Parse and validate the estimated weight entered on the lot form
///
/// The weight must parse as a number and be strictly positive; non-numeric
/// input never reaches a stored lot.
pub fn parse_weight_kg(raw: &str) -> Result<Decimal, &'static str> {
    if raw.trim().is_empty() {
        return Err("Weight is required");
    }
    let weight: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| "Weight must be a number")?;
    if weight <= Decimal::ZERO {
        return Err("Weight must be positive");
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Grapes").is_ok());
        assert!(validate_required("").is_err());
        assert!(validate_required("   ").is_err());
    }

    #[test]
    fn test_parse_weight_valid() {
        assert_eq!(parse_weight_kg("800").unwrap(), Decimal::from(800));
        assert_eq!(parse_weight_kg(" 12.5 ").unwrap(), "12.5".parse().unwrap());
    }

    #[test]
    fn test_parse_weight_rejects_empty_and_non_numeric() {
        assert!(parse_weight_kg("").is_err());
        assert!(parse_weight_kg("abc").is_err());
    }

    #[test]
    fn test_parse_weight_rejects_non_positive() {
        assert!(parse_weight_kg("0").is_err());
        assert!(parse_weight_kg("-5").is_err());
    }
}
