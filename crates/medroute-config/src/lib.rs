//! medroute configuration system.
//!
//! Provides TOML-based configuration for the oracle connection, the
//! coordinator session, and logging. All config sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medroute_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CoordinatorConfig, LogLevel, LoggingConfig, MedrouteConfig, OracleConfig, OracleProvider,
    CONFIG_SCHEMA_VERSION,
};

use medroute_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The default path is created from the
/// commented template when missing.
pub fn load_config(path: Option<&Path>) -> Result<MedrouteConfig, ConfigError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)
        }
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MedrouteConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
