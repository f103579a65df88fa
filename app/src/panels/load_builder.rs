//! Build-load page: pick lots into a stepped basket against a lane

use shared::models::{Basket, Lot};
use shared::seed::seed_lots;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct LoadBuilderPanel {
    pub lane: Option<String>,
    pub setpoint_c: f64,
    pub co_load: bool,
    pub pick_list: Vec<Lot>,
    pub basket: Basket,
}

impl LoadBuilderPanel {
    pub fn new(lane: Option<String>) -> Self {
        Self {
            lane,
            setpoint_c: 3.0,
            co_load: true,
            pick_list: seed_lots(),
            basket: Basket::new(),
        }
    }

    /// Add one 100 kg step of the picked lot
    pub fn add(&mut self, lot_id: &str) -> AppResult<()> {
        let lot = self
            .pick_list
            .iter()
            .find(|lot| lot.id == lot_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownLot(lot_id.to_string()))?;
        self.basket.add(&lot);
        Ok(())
    }

    /// Remove one step from the line at `index`
    pub fn decrement(&mut self, index: usize) {
        self.basket.decrement(index);
    }

    /// Page title suffix, "Select lane" when no lane was passed
    pub fn lane_label(&self) -> &str {
        self.lane.as_deref().unwrap_or("Select lane")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_known_lot_steps_quantity() {
        let mut panel = LoadBuilderPanel::new(Some("Nashik → Mumbai DC".to_string()));
        panel.add("LOT-NSK-001").unwrap();
        panel.add("LOT-NSK-001").unwrap();
        panel.add("LOT-NSK-002").unwrap();
        assert_eq!(panel.basket.total_kg(), 300);
        assert_eq!(panel.basket.lines.len(), 2);
    }

    #[test]
    fn test_add_unknown_lot_is_rejected() {
        let mut panel = LoadBuilderPanel::new(None);
        let err = panel.add("LOT-XYZ-999").unwrap_err();
        assert!(matches!(err, AppError::UnknownLot(_)));
        assert!(panel.basket.is_empty());
    }

    #[test]
    fn test_decrement_drops_emptied_line() {
        let mut panel = LoadBuilderPanel::new(None);
        panel.add("LOT-NSK-003").unwrap();
        panel.decrement(0);
        assert!(panel.basket.is_empty());
    }

    #[test]
    fn test_lane_label_placeholder() {
        assert_eq!(LoadBuilderPanel::new(None).lane_label(), "Select lane");
    }
}
