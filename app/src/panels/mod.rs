//! Per-panel page state
//!
//! Each panel owns the form fields, toggles, and derived values for one
//! screen. Page state is rebuilt on every navigation; only the FPO lot list
//! lives at session scope.

mod dispute;
mod distributor;
mod fast_track;
mod fpo;
mod gate_in;
mod load_builder;
mod nudge;
mod precool;
mod reefer;
mod reroute;
mod retailer;

pub use dispute::*;
pub use distributor::*;
pub use fast_track::*;
pub use fpo::*;
pub use gate_in::*;
pub use load_builder::*;
pub use nudge::*;
pub use precool::*;
pub use reefer::*;
pub use reroute::*;
pub use retailer::*;
