//! Raise-dispute page

use serde::{Deserialize, Serialize};
use shared::models::DisputeType;
use uuid::Uuid;

/// Confirmation copy; the tracking id is appended by the view
pub const DISPUTE_CONFIRMATION: &str = "Dispute submitted. SLA: < 48h. Tracking ID mailed.";

/// Receipt minted on submission; nothing else persists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisputeReceipt {
    pub tracking_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct DisputePanel {
    pub lot_id: Option<String>,
    pub dispute_type: DisputeType,
    pub details: String,
    pub receipt: Option<DisputeReceipt>,
}

impl DisputePanel {
    pub fn new(lot_id: Option<String>) -> Self {
        Self {
            lot_id,
            ..Self::default()
        }
    }

    /// Mint a tracking id and mark the dispute submitted
    pub fn submit(&mut self) -> &DisputeReceipt {
        self.receipt.get_or_insert_with(|| DisputeReceipt {
            tracking_id: Uuid::new_v4(),
        })
    }

    pub fn confirmation(&self) -> Option<String> {
        self.receipt
            .as_ref()
            .map(|receipt| format!("{} ({})", DISPUTE_CONFIRMATION, receipt.tracking_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_mints_tracking_id_once() {
        let mut panel = DisputePanel::new(Some("LOT-NSK-001".to_string()));
        panel.dispute_type = DisputeType::ShortDelivery;
        panel.details = "Weighed 60 kg short at gate".to_string();

        let first = panel.submit().tracking_id;
        let second = panel.submit().tracking_id;
        assert_eq!(first, second);
        assert!(panel.confirmation().unwrap().contains(&first.to_string()));
    }

    #[test]
    fn test_no_confirmation_before_submit() {
        assert!(DisputePanel::new(None).confirmation().is_none());
    }
}
