//! WebAssembly module for the ColdChainX prototype
//!
//! Provides the browser shell with:
//! - A full session (role/route state machine + panels) driven by JSON
//!   actions and rendered as JSON snapshots
//! - Standalone calculators for the gate-in QC score and freight estimate

use wasm_bindgen::prelude::*;

use coldchainx_app::{Action, Session};
use shared::models::{
    freight_estimate, is_fast_track_candidate, next_lot_id, BruisingSeverity, GateInAssessment,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A ColdChainX session held on the JavaScript side
#[wasm_bindgen]
pub struct CcxSession {
    inner: Session,
}

#[wasm_bindgen]
impl CcxSession {
    /// Start a fresh session on the FPO home screen
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Session::new(),
        }
    }

    /// Apply one tagged-JSON action, e.g. `{"action":"create_lot"}`
    ///
    /// Rejected actions leave the session untouched and surface the reason.
    pub fn dispatch(&mut self, action_json: &str) -> Result<(), JsValue> {
        self.try_dispatch(action_json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Snapshot of the active panel as JSON for the shell to paint
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.render_snapshot().map_err(|e| JsValue::from_str(&e))
    }
}

impl CcxSession {
    fn try_dispatch(&mut self, action_json: &str) -> Result<(), String> {
        let action: Action = serde_json::from_str(action_json)
            .map_err(|e| format!("Invalid action JSON: {}", e))?;
        self.inner.dispatch(action).map_err(|e| e.to_string())
    }

    fn render_snapshot(&self) -> Result<String, String> {
        serde_json::to_string(&self.inner.snapshot())
            .map_err(|e| format!("Snapshot serialization failed: {}", e))
    }
}

impl Default for CcxSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate-in QC score from the four assessment inputs
///
/// `bruising` is one of "none", "mild", "high"; anything else counts as none.
#[wasm_bindgen]
pub fn gate_in_score(
    temp_in_tolerance: bool,
    mold_present: bool,
    bruising: &str,
    weight_difference_kg: f64,
) -> u8 {
    let bruising = match bruising {
        "mild" => BruisingSeverity::Mild,
        "high" => BruisingSeverity::High,
        _ => BruisingSeverity::None,
    };
    GateInAssessment {
        temp_in_tolerance,
        mold_present,
        bruising,
        weight_difference_kg,
    }
    .score()
}

/// Freight estimate for a reefer search
#[wasm_bindgen]
pub fn estimate_freight(co_load: bool, destination: &str) -> i64 {
    freight_estimate(co_load, destination)
}

/// Whether a scored lot qualifies for the advisory fast-track hint
#[wasm_bindgen]
pub fn fast_track_candidate(score: u8, shelf_life_days: u32) -> bool {
    is_fast_track_candidate(score, shelf_life_days)
}

/// Next count-based lot identifier for a list of the given length
#[wasm_bindgen]
pub fn next_lot_identifier(count: usize) -> String {
    next_lot_id(count)
}
