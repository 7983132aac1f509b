//! Full configuration validation.
//!
//! Validates numeric ranges and required strings, collecting every error
//! into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::MedrouteConfig;
use medroute_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MedrouteConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_oracle(&mut errors, config);
    sections::validate_coordinator(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
