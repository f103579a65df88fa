//! SOP nudge page

use shared::models::NudgeAction;

/// Confirmation copy shown once a nudge is sent
pub const NUDGE_CONFIRMATION: &str =
    "Nudge sent to driver + hub. Auto-logged to shipment timeline.";

#[derive(Debug, Clone, Default)]
pub struct NudgePanel {
    pub lot_id: Option<String>,
    pub nudge: NudgeAction,
    pub note: String,
    pub sent: bool,
}

impl NudgePanel {
    pub fn new(lot_id: Option<String>) -> Self {
        Self {
            lot_id,
            ..Self::default()
        }
    }

    pub fn send(&mut self) {
        self.sent = true;
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.sent.then_some(NUDGE_CONFIRMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_sets_flag() {
        let mut panel = NudgePanel::new(Some("LOT-NSK-002".to_string()));
        panel.nudge = NudgeAction::TempReset;
        panel.note = "Driver notified at toll".to_string();
        panel.send();
        assert_eq!(panel.confirmation(), Some(NUDGE_CONFIRMATION));
    }
}
