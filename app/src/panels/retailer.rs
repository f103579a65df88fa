//! Retailer home: inbound queue, sorted marketplace, and cart

use shared::models::{sort_lots, Basket, Lot};
use shared::seed::seed_lots;
use shared::types::SortKey;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct RetailerPanel {
    pub sort_key: SortKey,
    pub inbound: Vec<Lot>,
    pub cart: Basket,
}

impl RetailerPanel {
    pub fn new() -> Self {
        Self {
            sort_key: SortKey::Score,
            inbound: seed_lots(),
            cart: Basket::new(),
        }
    }

    /// Verified lots sorted by the active key, always descending
    pub fn marketplace(&self) -> Vec<Lot> {
        let mut lots = self.inbound.clone();
        sort_lots(&mut lots, self.sort_key);
        lots
    }

    /// "Buy" adds the fixed 100 kg step, unrelated to the lot's own weight
    pub fn buy(&mut self, lot_id: &str) -> AppResult<()> {
        let lot = self
            .inbound
            .iter()
            .find(|lot| lot.id == lot_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownLot(lot_id.to_string()))?;
        self.cart.add(&lot);
        Ok(())
    }

    pub fn decrement_cart(&mut self, index: usize) {
        self.cart.decrement(index);
    }
}

impl Default for RetailerPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketplace_sorts_descending_by_key() {
        let mut panel = RetailerPanel::new();
        let by_score: Vec<u8> = panel
            .marketplace()
            .iter()
            .map(|l| l.freshness_score)
            .collect();
        assert_eq!(by_score, vec![92, 87, 81]);

        panel.sort_key = SortKey::Weight;
        let heaviest = panel.marketplace().remove(0);
        assert_eq!(heaviest.id, "LOT-NSK-002");
    }

    #[test]
    fn test_buy_steps_100_regardless_of_lot_weight() {
        let mut panel = RetailerPanel::new();
        // LOT-NSK-002 lists 1200 kg; a buy still adds exactly 100 kg
        panel.buy("LOT-NSK-002").unwrap();
        assert_eq!(panel.cart.total_kg(), 100);
        panel.buy("LOT-NSK-002").unwrap();
        assert_eq!(panel.cart.total_kg(), 200);
    }

    #[test]
    fn test_buy_unknown_lot_is_rejected() {
        let mut panel = RetailerPanel::new();
        assert!(matches!(
            panel.buy("LOT-NSK-404"),
            Err(AppError::UnknownLot(_))
        ));
        assert!(panel.cart.is_empty());
    }

    #[test]
    fn test_cart_decrement_removes_emptied_line() {
        let mut panel = RetailerPanel::new();
        panel.buy("LOT-NSK-001").unwrap();
        panel.decrement_cart(0);
        assert!(panel.cart.is_empty());
    }
}
