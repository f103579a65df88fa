//! In-transit dispatch actions: SOP nudges, reroutes, disputes

use serde::{Deserialize, Serialize};

/// Fixed ETA delta shown on the reroute page
pub const REROUTE_ETA_DELTA: &str = "+38 min";

/// Fixed cost delta shown on the reroute page, in rupees
pub const REROUTE_COST_DELTA: i64 = 900;

/// Corrective actions a distributor can nudge a driver/hub toward
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NudgeAction {
    #[default]
    CloseDoors,
    IncreaseAirflow,
    TempReset,
    HoldAtColdRoom,
}

impl NudgeAction {
    pub const ALL: [NudgeAction; 4] = [
        NudgeAction::CloseDoors,
        NudgeAction::IncreaseAirflow,
        NudgeAction::TempReset,
        NudgeAction::HoldAtColdRoom,
    ];
}

impl std::fmt::Display for NudgeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NudgeAction::CloseDoors => write!(f, "Close doors / reduce openings"),
            NudgeAction::IncreaseAirflow => write!(f, "Increase airflow (fan speed +10%)"),
            NudgeAction::TempReset => write!(f, "Temp reset to 3°C"),
            NudgeAction::HoldAtColdRoom => write!(f, "Hold at nearest cold room"),
        }
    }
}

/// Reasons offered on the reroute form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RerouteReason {
    #[default]
    AvoidCongestion,
    TempBreachRisk,
    BuyerRequest,
}

impl RerouteReason {
    pub const ALL: [RerouteReason; 3] = [
        RerouteReason::AvoidCongestion,
        RerouteReason::TempBreachRisk,
        RerouteReason::BuyerRequest,
    ];
}

impl std::fmt::Display for RerouteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RerouteReason::AvoidCongestion => write!(f, "Avoid congestion / meet cut-off"),
            RerouteReason::TempBreachRisk => write!(f, "Temp breach risk – need cold room"),
            RerouteReason::BuyerRequest => write!(f, "Buyer request – gate slot change"),
        }
    }
}

/// Dispute categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisputeType {
    #[default]
    TempBreach,
    ShortDelivery,
    GradeMismatch,
}

impl DisputeType {
    pub const ALL: [DisputeType; 3] = [
        DisputeType::TempBreach,
        DisputeType::ShortDelivery,
        DisputeType::GradeMismatch,
    ];
}

impl std::fmt::Display for DisputeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisputeType::TempBreach => write!(f, "Temp breach claim"),
            DisputeType::ShortDelivery => write!(f, "Short delivery / weight diff"),
            DisputeType::GradeMismatch => write!(f, "Quality grade mismatch"),
        }
    }
}
