//! Distributor home: lane planner and trip monitor

use shared::models::{Lane, Lot};
use shared::seed::{seed_lanes, seed_lots};

/// Telemetry line shown on every trip card (display constant)
pub const TRIP_TELEMETRY: &str = "Temp: 3.1°C • Humidity: 90% • ETA: 01:12";

#[derive(Debug, Clone)]
pub struct DistributorPanel {
    pub lanes: Vec<Lane>,
    pub trips: Vec<Lot>,
}

impl DistributorPanel {
    pub fn new() -> Self {
        Self {
            lanes: seed_lanes(),
            trips: seed_lots(),
        }
    }
}

impl Default for DistributorPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_lanes_and_trips() {
        let panel = DistributorPanel::new();
        assert_eq!(panel.lanes.len(), 3);
        assert_eq!(panel.trips.len(), 3);
        assert_eq!(panel.lanes[0].name, "Nashik → Mumbai DC");
    }
}
