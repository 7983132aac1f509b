//! Reading and validating config files.

use std::path::Path;

use medroute_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::MedrouteConfig;
use crate::validation;

/// Parse and validate the TOML file at `path`.
///
/// Missing keys take their defaults. A file that parses but fails
/// validation is reported and replaced by the defaults as a whole, so a
/// single bad value never leaves a half-applied config.
pub fn load_from_path(path: &Path) -> Result<MedrouteConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: MedrouteConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    match validation::validate(&config) {
        Ok(()) => {
            info!(path = %path.display(), "config loaded");
            Ok(config)
        }
        Err(e) => {
            warn!(path = %path.display(), "{e}; using default config");
            Ok(MedrouteConfig::default())
        }
    }
}

/// Load from the platform default path, writing the template on first run.
///
/// Failing to write the template is not fatal: the defaults are used.
pub fn load_default() -> Result<MedrouteConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }

    info!(path = %path.display(), "no config file yet");
    if let Err(e) = create_default_config(&path) {
        warn!("{e}");
    }
    Ok(MedrouteConfig::default())
}
