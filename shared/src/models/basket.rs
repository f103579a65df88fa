//! Quantity basket shared by the distributor load builder and retailer cart

use serde::{Deserialize, Serialize};

use crate::models::Lot;

/// Quantity added or removed per click, in kilograms
pub const STEP_KG: u32 = 100;

/// Advisory capacity of a single load, in kilograms
///
/// Only the capacity bar saturates at this value; nothing blocks a load from
/// exceeding it.
pub const LOAD_CAPACITY_KG: u32 = 2000;

/// A lot paired with a selected quantity
///
/// The quantity is always a positive multiple of [`STEP_KG`]; a line whose
/// quantity reaches zero is removed from the basket on the same call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasketLine {
    pub lot: Lot,
    pub qty_kg: u32,
}

/// An ordered list of basket lines keyed by lot identity
///
/// Backs both the load builder and the retailer cart; each page owns an
/// independent instance scoped to the page visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Basket {
    pub lines: Vec<BasketLine>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one step of the given lot
    ///
    /// Lookup-and-increment: if the lot is already present its quantity grows
    /// by [`STEP_KG`], otherwise a new line is appended at [`STEP_KG`]. A lot
    /// never appears on more than one line.
    pub fn add(&mut self, lot: &Lot) {
        match self.lines.iter_mut().find(|line| line.lot.id == lot.id) {
            Some(line) => line.qty_kg += STEP_KG,
            None => self.lines.push(BasketLine {
                lot: lot.clone(),
                qty_kg: STEP_KG,
            }),
        }
    }

    /// Remove one step from the line at `index`, flooring at zero
    ///
    /// Emptied lines are dropped by a whole-list retain rather than a
    /// targeted delete; only one line can sit at the boundary per call, so
    /// the sweep removes at most that line.
    pub fn decrement(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.qty_kg = line.qty_kg.saturating_sub(STEP_KG);
        }
        self.lines.retain(|line| line.qty_kg > 0);
    }

    /// Sum of all line quantities in kilograms
    pub fn total_kg(&self) -> u32 {
        self.lines.iter().map(|line| line.qty_kg).sum()
    }

    /// Fill level of the capacity bar, clamped to 100
    pub fn capacity_percent(&self) -> f64 {
        let pct = f64::from(self.total_kg()) / f64::from(LOAD_CAPACITY_KG) * 100.0;
        pct.min(100.0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_lots;
    use proptest::prelude::*;

    #[test]
    fn test_add_appends_then_increments() {
        let lots = seed_lots();
        let mut basket = Basket::new();
        basket.add(&lots[0]);
        basket.add(&lots[1]);
        basket.add(&lots[0]);

        assert_eq!(basket.lines.len(), 2);
        assert_eq!(basket.lines[0].qty_kg, 200);
        assert_eq!(basket.lines[1].qty_kg, 100);
        assert_eq!(basket.total_kg(), 300);
    }

    #[test]
    fn test_decrement_removes_emptied_line_same_call() {
        let lots = seed_lots();
        let mut basket = Basket::new();
        basket.add(&lots[0]);
        basket.add(&lots[1]);

        basket.decrement(0);
        assert_eq!(basket.lines.len(), 1);
        assert_eq!(basket.lines[0].lot.id, lots[1].id);
        assert_eq!(basket.total_kg(), 100);
    }

    #[test]
    fn test_decrement_out_of_range_is_noop() {
        let lots = seed_lots();
        let mut basket = Basket::new();
        basket.add(&lots[0]);
        basket.decrement(5);
        assert_eq!(basket.total_kg(), 100);
    }

    #[test]
    fn test_capacity_bar_saturates_but_total_does_not() {
        let lots = seed_lots();
        let mut basket = Basket::new();
        for _ in 0..25 {
            basket.add(&lots[0]);
        }
        assert_eq!(basket.total_kg(), 2500);
        assert!((basket.capacity_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_capacity_percent_partial() {
        let lots = seed_lots();
        let mut basket = Basket::new();
        for _ in 0..5 {
            basket.add(&lots[0]);
        }
        assert!((basket.capacity_percent() - 25.0).abs() < f64::EPSILON);
    }

    proptest! {
        /// Total always equals 100 kg times the add count for lots still in
        /// the basket, for any interleaving of adds and decrements.
        #[test]
        fn prop_total_tracks_surviving_steps(ops in proptest::collection::vec((0usize..3, proptest::bool::ANY), 0..64)) {
            let lots = seed_lots();
            let mut basket = Basket::new();
            for (i, is_add) in ops {
                if is_add {
                    basket.add(&lots[i]);
                } else {
                    basket.decrement(i);
                }
                let expected: u32 = basket.lines.iter().map(|l| l.qty_kg).sum();
                prop_assert_eq!(basket.total_kg(), expected);
                prop_assert!(basket.lines.iter().all(|l| l.qty_kg > 0));
                prop_assert!(basket.lines.iter().all(|l| l.qty_kg % STEP_KG == 0));
                // No lot appears twice
                for (a, line_a) in basket.lines.iter().enumerate() {
                    for line_b in basket.lines.iter().skip(a + 1) {
                        prop_assert_ne!(&line_a.lot.id, &line_b.lot.id);
                    }
                }
            }
        }
    }
}
