//! Reefer search page with the reactive freight estimate

use chrono::NaiveDate;
use shared::models::freight_estimate;
use shared::seed::DEFAULT_ORIGIN;

/// Fixed ETA and SOP copy shown under the estimate
pub const REEFER_ETA_SOP: &str = "6h 30m • SOP: 3°C / 90% RH";

#[derive(Debug, Clone)]
pub struct ReeferPanel {
    pub lot_id: Option<String>,
    pub origin: String,
    pub destination: String,
    pub pickup_date: NaiveDate,
    pub co_load: bool,
}

impl ReeferPanel {
    pub fn new(lot_id: Option<String>, today: NaiveDate) -> Self {
        Self {
            lot_id,
            origin: DEFAULT_ORIGIN.to_string(),
            destination: "Mumbai DC".to_string(),
            pickup_date: today,
            co_load: true,
        }
    }

    /// Recomputed whenever the co-load flag or destination changes
    pub fn estimate(&self) -> i64 {
        freight_estimate(self.co_load, &self.destination)
    }

    /// Suggested lane label, e.g. "Nashik → Mumbai DC"
    pub fn lane(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ReeferPanel {
        ReeferPanel::new(None, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_default_estimate_has_co_load_discount() {
        // co-load defaults to true, Mumbai takes no lane discount
        assert_eq!(panel().estimate(), 7800);
    }

    #[test]
    fn test_estimate_reacts_to_inputs() {
        let mut p = panel();
        p.co_load = false;
        assert_eq!(p.estimate(), 9000);
        p.destination = "Pune DC".to_string();
        assert_eq!(p.estimate(), 8700);
        p.co_load = true;
        assert_eq!(p.estimate(), 7500);
    }

    #[test]
    fn test_lane_label() {
        assert_eq!(panel().lane(), "Nashik → Mumbai DC");
    }
}
