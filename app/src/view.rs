//! Serializable view model handed to the rendering surface
//!
//! The surface paints the snapshot and dispatches input back as [`Action`]
//! values; every derived figure (estimate, capacity, QC score, sort order)
//! is computed here so the surface stays dumb.
//!
//! [`Action`]: crate::action::Action

use serde::Serialize;
use shared::models::{
    BasketLine, CarrierOption, DisputeType, Lane, Lot, NudgeAction, Packhouse, RerouteReason,
    SlotWindow, CANCEL_WINDOW_MINUTES, LOAD_CAPACITY_KG, PRE_COOL_SOP, QUEUE_TRUCKS_AHEAD,
    REROUTE_COST_DELTA, REROUTE_ETA_DELTA,
};
use shared::seed::{carrier_options, DESTINATIONS};
use shared::types::{lot_label, Role, Route, SortKey};

use crate::panels::{LotForm, REEFER_ETA_SOP, REROUTE_COMPLIANCE, TRIP_TELEMETRY};
use crate::session::{PanelState, Session};

/// A single KPI card
#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Kpi {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            hint: None,
        }
    }

    fn with_hint(label: &str, value: &str, hint: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

/// A trip card on the distributor's monitor
#[derive(Debug, Clone, Serialize)]
pub struct TripCard {
    pub lot: Lot,
    pub telemetry: String,
}

/// Everything the rendering surface needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub role: Role,
    /// Role switcher labels for the header
    pub roles: Vec<String>,
    pub route: Route,
    pub panel: PanelView,
}

/// The active panel, fully resolved for display
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum PanelView {
    FpoHome {
        kpis: Vec<Kpi>,
        form: LotForm,
        lots: Vec<Lot>,
    },
    DistributorHome {
        kpis: Vec<Kpi>,
        lanes: Vec<Lane>,
        trips: Vec<TripCard>,
    },
    RetailerHome {
        kpis: Vec<Kpi>,
        inbound: Vec<Lot>,
        sort_key: SortKey,
        sort_keys: Vec<String>,
        marketplace: Vec<Lot>,
        cart: Vec<BasketLine>,
        cart_total_kg: u32,
    },
    PreCool {
        lot: String,
        packhouse: String,
        packhouses: Vec<String>,
        slot: String,
        slots: Vec<String>,
        sop: String,
        queue_note: String,
        cancel_note: String,
        confirmation: Option<String>,
    },
    FindReefer {
        lot: String,
        origin: String,
        destination: String,
        destinations: Vec<String>,
        pickup_date: String,
        co_load: bool,
        lane: String,
        estimate: i64,
        eta_sop: String,
        carriers: Vec<CarrierOption>,
    },
    BuildLoad {
        lane: String,
        pick_list: Vec<Lot>,
        setpoint_c: f64,
        co_load: bool,
        lines: Vec<BasketLine>,
        total_kg: u32,
        capacity_kg: u32,
        capacity_percent: f64,
    },
    NudgeSop {
        lot: String,
        nudge: String,
        nudges: Vec<String>,
        note: String,
        confirmation: Option<String>,
    },
    Reroute {
        lot: String,
        destination: String,
        destinations: Vec<String>,
        reason: String,
        reasons: Vec<String>,
        eta_delta: String,
        cost_delta: i64,
        compliance: String,
        confirmation: Option<String>,
    },
    Dispute {
        lot: String,
        dispute_type: String,
        dispute_types: Vec<String>,
        details: String,
        confirmation: Option<String>,
    },
    GateIn {
        lot: String,
        temp_in_tolerance: bool,
        mold_present: bool,
        bruising: String,
        weight_difference_kg: f64,
        score: u8,
        decision: String,
        fast_track_hint: bool,
    },
    FastTrack {
        lot: String,
        eligible: Option<bool>,
        confirmation: Option<String>,
    },
}

impl Session {
    /// Render the active panel into a display snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            role: self.role,
            roles: Role::ALL.iter().map(Role::to_string).collect(),
            route: self.route.clone(),
            panel: self.panel_view(),
        }
    }

    fn panel_view(&self) -> PanelView {
        match &self.panel {
            PanelState::FpoHome(panel) => PanelView::FpoHome {
                kpis: vec![
                    Kpi::with_hint(
                        "Accepted-weight %",
                        "82%",
                        "Accepted weight / total delivered in last 30 days",
                    ),
                    Kpi::new("Active lots", self.fpo_lots.len().to_string()),
                    Kpi::new("Next payout", "T+2 days"),
                ],
                form: panel.form.clone(),
                lots: self.fpo_lots.clone(),
            },
            PanelState::DistributorHome(panel) => PanelView::DistributorHome {
                kpis: vec![
                    Kpi::new("Active trips", "8"),
                    Kpi::new("On-time %", "93%"),
                    Kpi::new("Dispute TAT", "< 48h"),
                ],
                lanes: panel.lanes.clone(),
                trips: panel
                    .trips
                    .iter()
                    .map(|lot| TripCard {
                        lot: lot.clone(),
                        telemetry: TRIP_TELEMETRY.to_string(),
                    })
                    .collect(),
            },
            PanelState::RetailerHome(panel) => PanelView::RetailerHome {
                kpis: vec![
                    Kpi::new("Shrink (pilot SKUs)", "-32%"),
                    Kpi::new("On-shelf avail.", "+2.8 pp"),
                    Kpi::new("Dispute TAT", "< 48h"),
                ],
                inbound: panel.inbound.clone(),
                sort_key: panel.sort_key,
                sort_keys: [SortKey::Score, SortKey::Days, SortKey::Weight]
                    .iter()
                    .map(SortKey::to_string)
                    .collect(),
                marketplace: panel.marketplace(),
                cart: panel.cart.lines.clone(),
                cart_total_kg: panel.cart.total_kg(),
            },
            PanelState::PreCool(panel) => PanelView::PreCool {
                lot: lot_label(panel.lot_id.as_deref()),
                packhouse: panel.packhouse.to_string(),
                packhouses: Packhouse::ALL.iter().map(Packhouse::to_string).collect(),
                slot: panel.slot.to_string(),
                slots: SlotWindow::ALL.iter().map(SlotWindow::to_string).collect(),
                sop: format!("Pre-cool SOP: {}", PRE_COOL_SOP),
                queue_note: format!(
                    "Live queue: {} trucks ahead at {}",
                    QUEUE_TRUCKS_AHEAD, panel.packhouse
                ),
                cancel_note: format!(
                    "Penalty-free cancel window: {} min before slot",
                    CANCEL_WINDOW_MINUTES
                ),
                confirmation: panel.confirmation().map(str::to_string),
            },
            PanelState::FindReefer(panel) => PanelView::FindReefer {
                lot: lot_label(panel.lot_id.as_deref()),
                origin: panel.origin.clone(),
                destination: panel.destination.clone(),
                destinations: DESTINATIONS.iter().map(|d| d.to_string()).collect(),
                pickup_date: panel.pickup_date.to_string(),
                co_load: panel.co_load,
                lane: panel.lane(),
                estimate: panel.estimate(),
                eta_sop: REEFER_ETA_SOP.to_string(),
                carriers: carrier_options(),
            },
            PanelState::BuildLoad(panel) => PanelView::BuildLoad {
                lane: panel.lane_label().to_string(),
                pick_list: panel.pick_list.clone(),
                setpoint_c: panel.setpoint_c,
                co_load: panel.co_load,
                lines: panel.basket.lines.clone(),
                total_kg: panel.basket.total_kg(),
                capacity_kg: LOAD_CAPACITY_KG,
                capacity_percent: panel.basket.capacity_percent(),
            },
            PanelState::NudgeSop(panel) => PanelView::NudgeSop {
                lot: lot_label(panel.lot_id.as_deref()),
                nudge: panel.nudge.to_string(),
                nudges: NudgeAction::ALL.iter().map(NudgeAction::to_string).collect(),
                note: panel.note.clone(),
                confirmation: panel.confirmation().map(str::to_string),
            },
            PanelState::Reroute(panel) => PanelView::Reroute {
                lot: lot_label(panel.lot_id.as_deref()),
                destination: panel.destination.clone(),
                destinations: DESTINATIONS.iter().map(|d| d.to_string()).collect(),
                reason: panel.reason.to_string(),
                reasons: RerouteReason::ALL
                    .iter()
                    .map(RerouteReason::to_string)
                    .collect(),
                eta_delta: REROUTE_ETA_DELTA.to_string(),
                cost_delta: REROUTE_COST_DELTA,
                compliance: REROUTE_COMPLIANCE.to_string(),
                confirmation: panel.confirmation().map(str::to_string),
            },
            PanelState::Dispute(panel) => PanelView::Dispute {
                lot: lot_label(panel.lot_id.as_deref()),
                dispute_type: panel.dispute_type.to_string(),
                dispute_types: DisputeType::ALL.iter().map(DisputeType::to_string).collect(),
                details: panel.details.clone(),
                confirmation: panel.confirmation(),
            },
            PanelState::GateIn(panel) => PanelView::GateIn {
                lot: lot_label(panel.lot_id.as_deref()),
                temp_in_tolerance: panel.assessment.temp_in_tolerance,
                mold_present: panel.assessment.mold_present,
                bruising: panel.assessment.bruising.to_string(),
                weight_difference_kg: panel.assessment.weight_difference_kg,
                score: panel.score(),
                decision: panel.decision().to_string(),
                fast_track_hint: panel.fast_track_hint(),
            },
            PanelState::FastTrack(panel) => PanelView::FastTrack {
                lot: lot_label(panel.lot_id.as_deref()),
                eligible: panel.eligible,
                confirmation: panel.confirmation().map(str::to_string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use shared::types::LOT_PLACEHOLDER;

    #[test]
    fn test_home_snapshot_counts_session_lots() {
        let session = Session::new();
        match session.snapshot().panel {
            PanelView::FpoHome { kpis, lots, .. } => {
                assert_eq!(kpis[1].value, "3");
                assert_eq!(lots.len(), 3);
            }
            other => panic!("unexpected panel view: {:?}", other),
        }
    }

    #[test]
    fn test_missing_lot_param_renders_placeholder() {
        let mut session = Session::new();
        session.navigate(Route::PreCool { lot_id: None });
        match session.snapshot().panel {
            PanelView::PreCool { lot, .. } => assert_eq!(lot, LOT_PLACEHOLDER),
            other => panic!("unexpected panel view: {:?}", other),
        }
    }

    #[test]
    fn test_reefer_snapshot_carries_estimate() {
        let mut session = Session::new();
        session.navigate(Route::FindReefer {
            lot_id: Some("LOT-NSK-001".to_string()),
        });
        session
            .dispatch(Action::SetDestination {
                value: "Pune DC".to_string(),
            })
            .unwrap();
        match session.snapshot().panel {
            PanelView::FindReefer {
                estimate, lane, ..
            } => {
                assert_eq!(estimate, 7500);
                assert_eq!(lane, "Nashik → Pune DC");
            }
            other => panic!("unexpected panel view: {:?}", other),
        }
    }

    #[test]
    fn test_snapshot_serializes_to_tagged_json() {
        let session = Session::with_role(Role::Retailer);
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["role"], "retailer");
        assert_eq!(json["panel"]["panel"], "retailer_home");
        assert_eq!(json["panel"]["cart_total_kg"], 0);
    }
}
