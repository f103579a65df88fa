//! Pre-cool slot booking page

use shared::models::{Packhouse, SlotWindow};

/// Confirmation copy shown once a booking is confirmed
pub const BOOKING_CONFIRMATION: &str = "Booked! Gate pass & QR sent to your app.";

#[derive(Debug, Clone, Default)]
pub struct PreCoolPanel {
    pub lot_id: Option<String>,
    pub packhouse: Packhouse,
    pub slot: SlotWindow,
    pub confirmed: bool,
}

impl PreCoolPanel {
    pub fn new(lot_id: Option<String>) -> Self {
        Self {
            lot_id,
            ..Self::default()
        }
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.confirmed.then_some(BOOKING_CONFIRMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_flips_flag_and_surfaces_copy() {
        let mut panel = PreCoolPanel::new(Some("LOT-NSK-001".to_string()));
        assert!(panel.confirmation().is_none());
        panel.confirm();
        assert_eq!(panel.confirmation(), Some(BOOKING_CONFIRMATION));
    }

    #[test]
    fn test_defaults() {
        let panel = PreCoolPanel::new(None);
        assert_eq!(panel.packhouse, Packhouse::NashikA);
        assert_eq!(panel.slot, SlotWindow::TodayEvening);
        assert!(!panel.confirmed);
    }
}
