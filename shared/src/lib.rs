//! Shared types and models for ColdChainX
//!
//! This crate contains the domain models, deterministic formulas, and seed
//! data shared between the session core, the WASM boundary, and other
//! components of the prototype.

pub mod models;
pub mod seed;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
