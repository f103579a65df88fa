//! Common types used across the prototype

use serde::{Deserialize, Serialize};

/// Dashboard roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Fpo,
    Distributor,
    Retailer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Fpo, Role::Distributor, Role::Retailer];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Fpo => write!(f, "FPO"),
            Role::Distributor => write!(f, "Distributor"),
            Role::Retailer => write!(f, "Retailer"),
        }
    }
}

/// A named screen plus its parameters
///
/// Replaced wholesale on every navigation; parameters are never merged
/// between transitions. A missing `lot_id` renders the "Select from My Lots"
/// placeholder on the target page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    PreCool {
        lot_id: Option<String>,
    },
    FindReefer {
        lot_id: Option<String>,
    },
    BuildLoad {
        lane: Option<String>,
    },
    NudgeSop {
        lot_id: Option<String>,
    },
    Reroute {
        lot_id: Option<String>,
    },
    Dispute {
        lot_id: Option<String>,
    },
    GateIn {
        lot_id: Option<String>,
    },
    FastTrack {
        lot_id: Option<String>,
    },
}

/// Placeholder shown when a page expects a lot parameter that was not passed
pub const LOT_PLACEHOLDER: &str = "Select from My Lots";

/// Render an optional lot parameter for display
pub fn lot_label(lot_id: Option<&str>) -> String {
    lot_id.unwrap_or(LOT_PLACEHOLDER).to_string()
}

/// Marketplace sort key; every key sorts descending
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Score,
    Days,
    Weight,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Score => write!(f, "Freshness Score"),
            SortKey::Days => write!(f, "Shelf-life left"),
            SortKey::Weight => write!(f, "Weight"),
        }
    }
}
