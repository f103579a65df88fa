//! Hard-coded seed data for the prototype

use rust_decimal::Decimal;

use crate::models::{CarrierOption, CoLoadAvailability, Lane, Lot, RiskBand};

/// Destinations offered on the reefer and reroute forms
pub const DESTINATIONS: [&str; 3] = ["Mumbai DC", "Pune DC", "Nhava Sheva (Port)"];

/// Default origin on the reefer search
pub const DEFAULT_ORIGIN: &str = "Nashik";

/// The three Nashik lots every dashboard starts from
pub fn seed_lots() -> Vec<Lot> {
    vec![
        Lot {
            id: "LOT-NSK-001".to_string(),
            crop: "Grapes".to_string(),
            variety: "Thompson".to_string(),
            weight_kg: Decimal::from(800),
            freshness_score: 92,
            shelf_life_days: 9,
        },
        Lot {
            id: "LOT-NSK-002".to_string(),
            crop: "Tomato".to_string(),
            variety: "Arka".to_string(),
            weight_kg: Decimal::from(1200),
            freshness_score: 81,
            shelf_life_days: 4,
        },
        Lot {
            id: "LOT-NSK-003".to_string(),
            crop: "Pomegranate".to_string(),
            variety: "Bhagwa".to_string(),
            weight_kg: Decimal::from(600),
            freshness_score: 87,
            shelf_life_days: 6,
        },
    ]
}

/// Lanes listed in the distributor's lane planner
pub fn seed_lanes() -> Vec<Lane> {
    vec![
        Lane {
            name: "Nashik → Mumbai DC".to_string(),
            km: 175,
            co_load: CoLoadAvailability::High,
            risk: RiskBand::Low,
        },
        Lane {
            name: "Nashik → Pune DC".to_string(),
            km: 210,
            co_load: CoLoadAvailability::Medium,
            risk: RiskBand::Medium,
        },
        Lane {
            name: "Nashik → Nhava Sheva (Port)".to_string(),
            km: 180,
            co_load: CoLoadAvailability::Low,
            risk: RiskBand::High,
        },
    ]
}

/// Carrier quotes shown beside the reefer search
pub fn carrier_options() -> Vec<CarrierOption> {
    vec![
        CarrierOption {
            vendor: "Vendor A".to_string(),
            highlights: "sealed doors • live telemetry".to_string(),
            quote: 9200,
        },
        CarrierOption {
            vendor: "Vendor B".to_string(),
            highlights: "reusable crates".to_string(),
            quote: 8800,
        },
        CarrierOption {
            vendor: "Vendor C".to_string(),
            highlights: "Pharma-grade reefer".to_string(),
            quote: 10_400,
        },
    ]
}
