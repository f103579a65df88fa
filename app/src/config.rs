//! Configuration for the demo walkthrough
//!
//! Hierarchical loading in the usual order: defaults in code, an optional
//! `config/<environment>.toml` file, then `CCX_`-prefixed environment
//! variable overrides. Only demo-level knobs live here; panel behavior is
//! fixed by the prototype semantics.

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Role;

use crate::error::AppError;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Demo walkthrough configuration
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    /// Role the session starts in: fpo, distributor, or retailer
    pub starting_role: String,

    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CCX_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("demo.starting_role", "fpo")?
            .set_default("demo.log_filter", "ccx_demo=debug,coldchainx_app=debug")?
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("CCX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl DemoConfig {
    /// Parse the configured starting role
    pub fn role(&self) -> Result<Role, AppError> {
        match self.starting_role.to_lowercase().as_str() {
            "fpo" => Ok(Role::Fpo),
            "distributor" => Ok(Role::Distributor),
            "retailer" => Ok(Role::Retailer),
            other => Err(AppError::Configuration(format!(
                "unknown starting role: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        let demo = DemoConfig {
            starting_role: "Distributor".to_string(),
            log_filter: String::new(),
        };
        assert_eq!(demo.role().unwrap(), Role::Distributor);
    }

    #[test]
    fn test_unknown_role_is_configuration_error() {
        let demo = DemoConfig {
            starting_role: "admin".to_string(),
            log_filter: String::new(),
        };
        assert!(demo.role().is_err());
    }
}
