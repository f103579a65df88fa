//! Session state machine
//!
//! Two pieces of process-wide state exist: the active role and the active
//! route. Everything else is page state owned by the panel that declared it
//! and rebuilt on every navigation. Transitions are synchronous; an action
//! takes effect before the next one is dispatched.

use chrono::Local;
use shared::models::Lot;
use shared::seed::seed_lots;
use shared::types::{Role, Route};

use crate::action::Action;
use crate::error::{AppError, AppResult};
use crate::panels::{
    DisputePanel, DistributorPanel, FastTrackPanel, FpoHomePanel, GateInPanel, LoadBuilderPanel,
    NudgePanel, PreCoolPanel, ReeferPanel, RetailerPanel, ReroutePanel,
};

/// Page state for the one panel matching the current (role, route) pair
#[derive(Debug, Clone)]
pub enum PanelState {
    FpoHome(FpoHomePanel),
    DistributorHome(DistributorPanel),
    RetailerHome(RetailerPanel),
    PreCool(PreCoolPanel),
    FindReefer(ReeferPanel),
    BuildLoad(LoadBuilderPanel),
    NudgeSop(NudgePanel),
    Reroute(ReroutePanel),
    Dispute(DisputePanel),
    GateIn(GateInPanel),
    FastTrack(FastTrackPanel),
}

impl PanelState {
    /// Build fresh page state for a (role, route) pair
    ///
    /// Sub-pages match on the route alone; only the home route branches on
    /// the role, so exactly one panel matches any pair.
    fn enter(role: Role, route: &Route) -> Self {
        match route {
            Route::Home => match role {
                Role::Fpo => PanelState::FpoHome(FpoHomePanel::new()),
                Role::Distributor => PanelState::DistributorHome(DistributorPanel::new()),
                Role::Retailer => PanelState::RetailerHome(RetailerPanel::new()),
            },
            Route::PreCool { lot_id } => PanelState::PreCool(PreCoolPanel::new(lot_id.clone())),
            Route::FindReefer { lot_id } => PanelState::FindReefer(ReeferPanel::new(
                lot_id.clone(),
                Local::now().date_naive(),
            )),
            Route::BuildLoad { lane } => PanelState::BuildLoad(LoadBuilderPanel::new(lane.clone())),
            Route::NudgeSop { lot_id } => PanelState::NudgeSop(NudgePanel::new(lot_id.clone())),
            Route::Reroute { lot_id } => PanelState::Reroute(ReroutePanel::new(lot_id.clone())),
            Route::Dispute { lot_id } => PanelState::Dispute(DisputePanel::new(lot_id.clone())),
            Route::GateIn { lot_id } => {
                PanelState::GateIn(GateInPanel::new(lot_id.clone(), &seed_lots()))
            }
            Route::FastTrack { lot_id } => {
                PanelState::FastTrack(FastTrackPanel::new(lot_id.clone(), &seed_lots()))
            }
        }
    }
}

/// One user session: role, route, session-scoped lots, and the active panel
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) role: Role,
    pub(crate) route: Route,
    /// FPO lot list; survives navigation for the life of the session
    pub(crate) fpo_lots: Vec<Lot>,
    pub(crate) panel: PanelState,
}

impl Session {
    pub fn new() -> Self {
        Self::with_role(Role::Fpo)
    }

    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            route: Route::Home,
            fpo_lots: seed_lots(),
            panel: PanelState::enter(role, &Route::Home),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Session-scoped FPO lot list
    pub fn lots(&self) -> &[Lot] {
        &self.fpo_lots
    }

    /// Replace the role and force the route back to that role's home,
    /// discarding any sub-page parameters in flight
    pub fn set_role(&mut self, role: Role) {
        tracing::info!(role = %role, "switching role");
        self.role = role;
        self.navigate(Route::Home);
    }

    /// Replace the route unconditionally and rebuild the matching panel
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(route = ?route, "navigating");
        self.panel = PanelState::enter(self.role, &route);
        self.route = route;
    }

    /// Apply one action; errors leave the session untouched
    pub fn dispatch(&mut self, action: Action) -> AppResult<()> {
        tracing::debug!(action = action.name(), "dispatching");
        match action {
            Action::SetRole { role } => {
                self.set_role(role);
                Ok(())
            }
            Action::Navigate { route } => {
                self.navigate(route);
                Ok(())
            }
            other => self.dispatch_to_panel(other),
        }
    }

    fn dispatch_to_panel(&mut self, action: Action) -> AppResult<()> {
        match (&mut self.panel, action) {
            // FPO home
            (PanelState::FpoHome(panel), Action::SetCrop { value }) => {
                panel.form.crop = value;
                Ok(())
            }
            (PanelState::FpoHome(panel), Action::SetVariety { value }) => {
                panel.form.variety = value;
                Ok(())
            }
            (PanelState::FpoHome(panel), Action::SetWeight { value }) => {
                panel.form.weight = value;
                Ok(())
            }
            (PanelState::FpoHome(panel), Action::CreateLot) => {
                let lot = panel.create_lot(&mut self.fpo_lots)?;
                tracing::info!(lot_id = %lot.id, "lot created");
                Ok(())
            }

            // Pre-cool booking
            (PanelState::PreCool(panel), Action::SelectPackhouse { packhouse }) => {
                panel.packhouse = packhouse;
                Ok(())
            }
            (PanelState::PreCool(panel), Action::SelectSlot { slot }) => {
                panel.slot = slot;
                Ok(())
            }
            (PanelState::PreCool(panel), Action::ConfirmBooking) => {
                panel.confirm();
                Ok(())
            }

            // Reefer search
            (PanelState::FindReefer(panel), Action::SetOrigin { value }) => {
                panel.origin = value;
                Ok(())
            }
            (PanelState::FindReefer(panel), Action::SetDestination { value }) => {
                panel.destination = value;
                Ok(())
            }
            (PanelState::FindReefer(panel), Action::SetPickupDate { date }) => {
                panel.pickup_date = date;
                Ok(())
            }
            (PanelState::FindReefer(panel), Action::SetCoLoad { allowed }) => {
                panel.co_load = allowed;
                Ok(())
            }

            // Load builder
            (PanelState::BuildLoad(panel), Action::AddToLoad { lot_id }) => panel.add(&lot_id),
            (PanelState::BuildLoad(panel), Action::DecrementLoad { index }) => {
                panel.decrement(index);
                Ok(())
            }
            (PanelState::BuildLoad(panel), Action::SetSetpoint { celsius }) => {
                panel.setpoint_c = celsius;
                Ok(())
            }
            (PanelState::BuildLoad(panel), Action::SetCoLoad { allowed }) => {
                panel.co_load = allowed;
                Ok(())
            }

            // SOP nudge
            (PanelState::NudgeSop(panel), Action::SelectNudge { nudge }) => {
                panel.nudge = nudge;
                Ok(())
            }
            (PanelState::NudgeSop(panel), Action::SetNote { value }) => {
                panel.note = value;
                Ok(())
            }
            (PanelState::NudgeSop(panel), Action::SendNudge) => {
                panel.send();
                Ok(())
            }

            // Reroute
            (PanelState::Reroute(panel), Action::SetDestination { value }) => {
                panel.destination = value;
                Ok(())
            }
            (PanelState::Reroute(panel), Action::SelectRerouteReason { reason }) => {
                panel.reason = reason;
                Ok(())
            }
            (PanelState::Reroute(panel), Action::ConfirmReroute) => {
                panel.confirm();
                Ok(())
            }

            // Dispute
            (PanelState::Dispute(panel), Action::SelectDisputeType { dispute_type }) => {
                panel.dispute_type = dispute_type;
                Ok(())
            }
            (PanelState::Dispute(panel), Action::SetDisputeDetails { value }) => {
                panel.details = value;
                Ok(())
            }
            (PanelState::Dispute(panel), Action::SubmitDispute) => {
                let receipt = panel.submit();
                tracing::info!(tracking_id = %receipt.tracking_id, "dispute submitted");
                Ok(())
            }

            // Retailer home
            (PanelState::RetailerHome(panel), Action::SetSortKey { key }) => {
                panel.sort_key = key;
                Ok(())
            }
            (PanelState::RetailerHome(panel), Action::Buy { lot_id }) => panel.buy(&lot_id),
            (PanelState::RetailerHome(panel), Action::DecrementCart { index }) => {
                panel.decrement_cart(index);
                Ok(())
            }

            // Gate-in QC
            (PanelState::GateIn(panel), Action::SetTempInTolerance { ok }) => {
                panel.assessment.temp_in_tolerance = ok;
                Ok(())
            }
            (PanelState::GateIn(panel), Action::SetMoldPresent { present }) => {
                panel.assessment.mold_present = present;
                Ok(())
            }
            (PanelState::GateIn(panel), Action::SetBruising { severity }) => {
                panel.assessment.bruising = severity;
                Ok(())
            }
            (PanelState::GateIn(panel), Action::SetWeightDifference { kg }) => {
                panel.assessment.weight_difference_kg = kg;
                Ok(())
            }

            // Fast-track
            (PanelState::FastTrack(panel), Action::ConfirmFastTrack) => {
                panel.confirm();
                Ok(())
            }

            (_, other) => {
                tracing::warn!(action = other.name(), "action rejected for active panel");
                Err(AppError::InvalidAction(other.name().to_string()))
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
