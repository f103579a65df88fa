//! Reefer freight estimate

/// Base fare for a reefer booking, in rupees
pub const BASE_FARE: i64 = 9000;

/// Discount applied when co-loading is allowed
pub const CO_LOAD_DISCOUNT: i64 = 1200;

/// Discount applied on lanes into Pune
pub const PUNE_LANE_DISCOUNT: i64 = 300;

/// Deterministic freight estimate for a reefer search
///
/// The Pune discount is a substring match, not an exact-match lookup: any
/// destination containing "Pune" qualifies.
pub fn freight_estimate(co_load: bool, destination: &str) -> i64 {
    let mut estimate = BASE_FARE;
    if co_load {
        estimate -= CO_LOAD_DISCOUNT;
    }
    if destination.contains("Pune") {
        estimate -= PUNE_LANE_DISCOUNT;
    }
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_fare_without_discounts() {
        assert_eq!(freight_estimate(false, "Mumbai DC"), 9000);
    }

    #[test]
    fn test_both_discounts_stack() {
        assert_eq!(freight_estimate(true, "Pune DC"), 7500);
    }

    #[test]
    fn test_co_load_only() {
        assert_eq!(freight_estimate(true, "Nhava Sheva (Port)"), 7800);
    }

    #[test]
    fn test_pune_discount_is_substring_match() {
        assert_eq!(freight_estimate(false, "Pune District"), 8700);
        assert_eq!(freight_estimate(false, "pune dc"), 9000);
    }
}
