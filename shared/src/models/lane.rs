//! Distributor lanes and carrier options

use serde::{Deserialize, Serialize};

/// Co-load availability on a lane
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoLoadAvailability {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for CoLoadAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoLoadAvailability::High => write!(f, "High"),
            CoLoadAvailability::Medium => write!(f, "Med"),
            CoLoadAvailability::Low => write!(f, "Low"),
        }
    }
}

/// Lane risk band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskBand::Low => write!(f, "Low"),
            RiskBand::Medium => write!(f, "Med"),
            RiskBand::High => write!(f, "High"),
        }
    }
}

/// A transport lane shown in the distributor's lane planner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lane {
    pub name: String,
    pub km: u32,
    pub co_load: CoLoadAvailability,
    pub risk: RiskBand,
}

/// A carrier quote shown beside the reefer search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarrierOption {
    pub vendor: String,
    pub highlights: String,
    pub quote: i64,
}
