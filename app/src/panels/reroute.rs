//! Reroute page with fixed ETA/cost deltas

use shared::models::RerouteReason;

/// Compliance note shown with the deltas
pub const REROUTE_COMPLIANCE: &str = "SOP unchanged (3°C/90% RH)";

/// Confirmation copy shown once the reroute is confirmed
pub const REROUTE_CONFIRMATION: &str = "Reroute confirmed. Driver + buyer gate notified.";

#[derive(Debug, Clone)]
pub struct ReroutePanel {
    pub lot_id: Option<String>,
    pub destination: String,
    pub reason: RerouteReason,
    pub confirmed: bool,
}

impl ReroutePanel {
    pub fn new(lot_id: Option<String>) -> Self {
        Self {
            lot_id,
            destination: "Mumbai DC".to_string(),
            reason: RerouteReason::default(),
            confirmed: false,
        }
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.confirmed.then_some(REROUTE_CONFIRMATION)
    }
}
