//! Actions the rendering surface can dispatch into the session
//!
//! One variant per input binding. Router actions (`SetRole`, `Navigate`)
//! are accepted from any panel; the rest only apply to the panel that owns
//! the bound control and are rejected otherwise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{
    BruisingSeverity, DisputeType, NudgeAction, Packhouse, RerouteReason, Role, Route, SlotWindow,
    SortKey,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    // Router
    SetRole { role: Role },
    Navigate { route: Route },

    // FPO home
    SetCrop { value: String },
    SetVariety { value: String },
    SetWeight { value: String },
    CreateLot,

    // Pre-cool booking
    SelectPackhouse { packhouse: Packhouse },
    SelectSlot { slot: SlotWindow },
    ConfirmBooking,

    // Reefer search
    SetOrigin { value: String },
    SetDestination { value: String },
    SetPickupDate { date: NaiveDate },
    SetCoLoad { allowed: bool },

    // Load builder
    AddToLoad { lot_id: String },
    DecrementLoad { index: usize },
    SetSetpoint { celsius: f64 },

    // SOP nudge
    SelectNudge { nudge: NudgeAction },
    SetNote { value: String },
    SendNudge,

    // Reroute
    SelectRerouteReason { reason: RerouteReason },
    ConfirmReroute,

    // Dispute
    SelectDisputeType { dispute_type: DisputeType },
    SetDisputeDetails { value: String },
    SubmitDispute,

    // Retailer home
    SetSortKey { key: SortKey },
    Buy { lot_id: String },
    DecrementCart { index: usize },

    // Gate-in QC
    SetTempInTolerance { ok: bool },
    SetMoldPresent { present: bool },
    SetBruising { severity: BruisingSeverity },
    SetWeightDifference { kg: f64 },

    // Fast-track
    ConfirmFastTrack,
}

impl Action {
    /// Short name used in logs and rejection messages
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetRole { .. } => "set_role",
            Action::Navigate { .. } => "navigate",
            Action::SetCrop { .. } => "set_crop",
            Action::SetVariety { .. } => "set_variety",
            Action::SetWeight { .. } => "set_weight",
            Action::CreateLot => "create_lot",
            Action::SelectPackhouse { .. } => "select_packhouse",
            Action::SelectSlot { .. } => "select_slot",
            Action::ConfirmBooking => "confirm_booking",
            Action::SetOrigin { .. } => "set_origin",
            Action::SetDestination { .. } => "set_destination",
            Action::SetPickupDate { .. } => "set_pickup_date",
            Action::SetCoLoad { .. } => "set_co_load",
            Action::AddToLoad { .. } => "add_to_load",
            Action::DecrementLoad { .. } => "decrement_load",
            Action::SetSetpoint { .. } => "set_setpoint",
            Action::SelectNudge { .. } => "select_nudge",
            Action::SetNote { .. } => "set_note",
            Action::SendNudge => "send_nudge",
            Action::SelectRerouteReason { .. } => "select_reroute_reason",
            Action::ConfirmReroute => "confirm_reroute",
            Action::SelectDisputeType { .. } => "select_dispute_type",
            Action::SetDisputeDetails { .. } => "set_dispute_details",
            Action::SubmitDispute => "submit_dispute",
            Action::SetSortKey { .. } => "set_sort_key",
            Action::Buy { .. } => "buy",
            Action::DecrementCart { .. } => "decrement_cart",
            Action::SetTempInTolerance { .. } => "set_temp_in_tolerance",
            Action::SetMoldPresent { .. } => "set_mold_present",
            Action::SetBruising { .. } => "set_bruising",
            Action::SetWeightDifference { .. } => "set_weight_difference",
            Action::ConfirmFastTrack => "confirm_fast_track",
        }
    }
}
