//! FPO home panel: KPIs, lot creation form, "My Lots" list

use serde::{Deserialize, Serialize};
use shared::models::{next_lot_id, Lot};
use shared::validation::{parse_weight_kg, validate_required};

use crate::error::{AppError, AppResult};

/// Lot creation form fields, cleared after a successful save
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LotForm {
    pub crop: String,
    pub variety: String,
    pub weight: String,
}

/// FPO home page state
///
/// The lot list itself is session-scoped and passed in by the dispatcher;
/// only the form lives here.
#[derive(Debug, Clone, Default)]
pub struct FpoHomePanel {
    pub form: LotForm,
}

impl FpoHomePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form and prepend a new lot to the session list
    ///
    /// The new lot gets the count-based next identifier and the default
    /// freshness score and shelf-life. The form is cleared on success and
    /// left untouched on error.
    pub fn create_lot(&mut self, lots: &mut Vec<Lot>) -> AppResult<Lot> {
        validate_required(&self.form.crop).map_err(|m| AppError::validation("crop", m))?;
        validate_required(&self.form.variety).map_err(|m| AppError::validation("variety", m))?;
        let weight_kg =
            parse_weight_kg(&self.form.weight).map_err(|m| AppError::validation("weight", m))?;

        let lot = Lot::new(
            next_lot_id(lots.len()),
            self.form.crop.trim(),
            self.form.variety.trim(),
            weight_kg,
        );
        lots.insert(0, lot.clone());
        self.form = LotForm::default();
        Ok(lot)
    }
}
