//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = MedrouteConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = MedrouteConfig::default();
    config.oracle.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("oracle.temperature"));

    config.oracle.temperature = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("oracle.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = MedrouteConfig::default();
    config.oracle.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = MedrouteConfig::default();
    config.oracle.max_output_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("oracle.max_output_tokens"));
}

#[test]
fn catches_empty_model() {
    let mut config = MedrouteConfig::default();
    config.oracle.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("oracle.model must not be empty"));
}

#[test]
fn catches_blank_system_prompt_override() {
    let mut config = MedrouteConfig::default();
    config.oracle.system_prompt = Some(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("oracle.system_prompt"));
}

#[test]
fn catches_followup_delay_too_large() {
    let mut config = MedrouteConfig::default();
    config.coordinator.followup_delay_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("coordinator.followup_delay_ms"));
}

#[test]
fn zero_followup_delay_is_allowed() {
    let mut config = MedrouteConfig::default();
    config.coordinator.followup_delay_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = MedrouteConfig::default();
    config.oracle.request_timeout_secs = 0;
    config.oracle.connect_timeout_secs = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("oracle.request_timeout_secs"));
    assert!(err.contains("oracle.connect_timeout_secs"));
    assert!(err.contains("; "));
}
