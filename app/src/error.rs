//! Error handling for the ColdChainX session core
//!
//! Every rejected action carries an explicit reason instead of being
//! swallowed. Errors never mutate session state.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Unknown lot: {0}")]
    UnknownLot(String),

    #[error("Action not valid for the active panel: {0}")]
    InvalidAction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for dispatch and panel operations
pub type AppResult<T> = Result<T, AppError>;
