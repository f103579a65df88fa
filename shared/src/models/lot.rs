//! Lot model and identifier generation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::SortKey;

/// Site prefix for lot identifiers (e.g., "LOT-NSK-001")
pub const LOT_ID_PREFIX: &str = "LOT-NSK-";

/// Freshness score assigned to newly created lots
pub const DEFAULT_FRESHNESS_SCORE: u8 = 88;

/// Shelf-life assigned to newly created lots, in days
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// A tracked batch of a single crop/variety
///
/// Immutable once created; gate-in QC never writes back to the stored score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lot {
    /// Identifier in the format `LOT-<SITE>-<seq>`
    pub id: String,
    pub crop: String,
    pub variety: String,
    pub weight_kg: Decimal,
    /// Freshness score (0-100)
    pub freshness_score: u8,
    /// Remaining shelf-life in days
    pub shelf_life_days: u32,
}

impl Lot {
    pub fn new(
        id: String,
        crop: impl Into<String>,
        variety: impl Into<String>,
        weight_kg: Decimal,
    ) -> Self {
        Self {
            id,
            crop: crop.into(),
            variety: variety.into(),
            weight_kg,
            freshness_score: DEFAULT_FRESHNESS_SCORE,
            shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
        }
    }
}

/// Generate the next lot identifier from the current list length
///
/// Count-based rather than max-based: the sequence is `len + 1` regardless of
/// which identifiers are already present. Identifiers could repeat if lots
/// were ever removed; the prototype never removes them.
pub fn next_lot_id(count: usize) -> String {
    format!("{}{:03}", LOT_ID_PREFIX, count + 1)
}

/// Sort lots in place by the given key, always descending
///
/// No secondary tie-break key; ties keep whatever order the comparator
/// leaves them in.
pub fn sort_lots(lots: &mut [Lot], key: SortKey) {
    match key {
        SortKey::Score => lots.sort_by(|a, b| b.freshness_score.cmp(&a.freshness_score)),
        SortKey::Days => lots.sort_by(|a, b| b.shelf_life_days.cmp(&a.shelf_life_days)),
        SortKey::Weight => lots.sort_by(|a, b| b.weight_kg.cmp(&a.weight_kg)),
    }
}
