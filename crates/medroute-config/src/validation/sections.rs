//! Validation for the oracle and coordinator sections.

use crate::schema::MedrouteConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate oracle connection constraints.
pub(crate) fn validate_oracle(errors: &mut Vec<String>, config: &MedrouteConfig) {
    let oracle = &config.oracle;
    validate_non_empty(errors, "oracle.model", &oracle.model);
    validate_non_empty(errors, "oracle.base_url", &oracle.base_url);
    validate_non_empty(errors, "oracle.api_key_env", &oracle.api_key_env);
    validate_range_f64(errors, "oracle.temperature", oracle.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "oracle.max_output_tokens",
        oracle.max_output_tokens,
        1,
        65536,
    );
    validate_range(
        errors,
        "oracle.connect_timeout_secs",
        oracle.connect_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "oracle.request_timeout_secs",
        oracle.request_timeout_secs,
        1,
        600,
    );
    if let Some(prompt) = &oracle.system_prompt {
        validate_non_empty(errors, "oracle.system_prompt", prompt);
    }
}

/// Validate coordinator constraints.
pub(crate) fn validate_coordinator(errors: &mut Vec<String>, config: &MedrouteConfig) {
    validate_range(
        errors,
        "coordinator.followup_delay_ms",
        config.coordinator.followup_delay_ms,
        0,
        60_000,
    );
}
