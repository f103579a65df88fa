//! Fast-track page: advisory eligibility plus a confirm-only form

use shared::models::{is_fast_track_candidate, Lot};

/// Confirmation copy shown once fast-track handling is requested
pub const FAST_TRACK_CONFIRMATION: &str = "Fast-track requested. Dock team notified.";

#[derive(Debug, Clone, Default)]
pub struct FastTrackPanel {
    pub lot_id: Option<String>,
    /// Eligibility from the lot's stored score and shelf-life; advisory only
    pub eligible: Option<bool>,
    pub confirmed: bool,
}

impl FastTrackPanel {
    pub fn new(lot_id: Option<String>, inbound: &[Lot]) -> Self {
        let eligible = lot_id.as_deref().and_then(|id| {
            inbound
                .iter()
                .find(|lot| lot.id == id)
                .map(|lot| is_fast_track_candidate(lot.freshness_score, lot.shelf_life_days))
        });
        Self {
            lot_id,
            eligible,
            confirmed: false,
        }
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.confirmed.then_some(FAST_TRACK_CONFIRMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::seed::seed_lots;

    #[test]
    fn test_eligibility_from_stored_lot() {
        // LOT-NSK-001: score 92, 9 days left
        let panel = FastTrackPanel::new(Some("LOT-NSK-001".to_string()), &seed_lots());
        assert_eq!(panel.eligible, Some(true));

        // LOT-NSK-002: score 81 misses the 85 threshold
        let panel = FastTrackPanel::new(Some("LOT-NSK-002".to_string()), &seed_lots());
        assert_eq!(panel.eligible, Some(false));
    }

    #[test]
    fn test_confirm_is_advisory_and_independent_of_eligibility() {
        let mut panel = FastTrackPanel::new(Some("LOT-NSK-002".to_string()), &seed_lots());
        panel.confirm();
        assert_eq!(panel.confirmation(), Some(FAST_TRACK_CONFIRMATION));
    }

    #[test]
    fn test_missing_lot_param() {
        let panel = FastTrackPanel::new(None, &seed_lots());
        assert!(panel.eligible.is_none());
    }
}
