//! ColdChainX session core
//!
//! Holds the process-wide view state (active role + route), the per-panel
//! page state, and the action dispatcher. The rendering surface talks to
//! this crate through [`Action`] values going in and [`Snapshot`] trees
//! coming out; nothing here performs I/O.

pub mod action;
pub mod config;
pub mod error;
pub mod panels;
pub mod session;
pub mod view;

pub use crate::action::Action;
pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::session::{PanelState, Session};
pub use crate::view::Snapshot;
