//! Gate-in QC page: four inputs, one deterministic score

use shared::models::{is_fast_track_candidate, GateInAssessment, Lot, QcDecision};

#[derive(Debug, Clone, Default)]
pub struct GateInPanel {
    pub lot_id: Option<String>,
    /// Shelf-life of the assessed lot, resolved from the inbound queue on
    /// entry; the fast-track hint stays hidden when the lot is unknown.
    pub shelf_life_days: Option<u32>,
    pub assessment: GateInAssessment,
}

impl GateInPanel {
    pub fn new(lot_id: Option<String>, inbound: &[Lot]) -> Self {
        let shelf_life_days = lot_id.as_deref().and_then(|id| {
            inbound
                .iter()
                .find(|lot| lot.id == id)
                .map(|lot| lot.shelf_life_days)
        });
        Self {
            lot_id,
            shelf_life_days,
            assessment: GateInAssessment::default(),
        }
    }

    pub fn score(&self) -> u8 {
        self.assessment.score()
    }

    pub fn decision(&self) -> QcDecision {
        self.assessment.decision()
    }

    /// Advisory hint only; never routes anything
    pub fn fast_track_hint(&self) -> bool {
        self.shelf_life_days
            .map(|days| is_fast_track_candidate(self.score(), days))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::BruisingSeverity;
    use shared::seed::seed_lots;

    #[test]
    fn test_score_recomputes_per_input_change() {
        let mut panel = GateInPanel::new(Some("LOT-NSK-001".to_string()), &seed_lots());
        assert_eq!(panel.score(), 100);

        panel.assessment.mold_present = true;
        assert_eq!(panel.score(), 70);
        assert_eq!(panel.decision(), QcDecision::Accepted);

        panel.assessment.bruising = BruisingSeverity::Mild;
        assert_eq!(panel.score(), 60);
        assert_eq!(panel.decision(), QcDecision::Rejected);
    }

    #[test]
    fn test_fast_track_hint_needs_score_and_shelf_life() {
        // LOT-NSK-001 has 9 days left
        let mut panel = GateInPanel::new(Some("LOT-NSK-001".to_string()), &seed_lots());
        assert!(panel.fast_track_hint());

        panel.assessment.weight_difference_kg = 160.0; // score 84
        assert!(!panel.fast_track_hint());

        // LOT-NSK-002 has only 4 days left
        let short_lived = GateInPanel::new(Some("LOT-NSK-002".to_string()), &seed_lots());
        assert_eq!(short_lived.score(), 100);
        assert!(!short_lived.fast_track_hint());
    }

    #[test]
    fn test_unknown_lot_suppresses_hint() {
        let panel = GateInPanel::new(Some("LOT-NSK-404".to_string()), &seed_lots());
        assert!(panel.shelf_life_days.is_none());
        assert!(!panel.fast_track_hint());
    }
}
