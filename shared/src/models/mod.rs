//! Domain models for ColdChainX

mod basket;
mod booking;
mod dispatch;
mod freight;
mod lane;
mod lot;
mod qc;

pub use basket::*;
pub use booking::*;
pub use dispatch::*;
pub use freight::*;
pub use lane::*;
pub use lot::*;
pub use qc::*;
