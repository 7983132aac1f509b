//! Wiring from configuration to a ready coordinator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use medroute_ai::{
    AiError, ChatOracle, GeminiClient, GeminiConfig, Oracle, OracleSession, SessionSpec,
};
use medroute_config::{MedrouteConfig, OracleProvider};
use medroute_coordinator::{coordinator_tools, CoordinatorSettings, DEFAULT_SYSTEM_PROMPT};

/// Session settings derived from the loaded config.
pub fn coordinator_settings(config: &MedrouteConfig) -> CoordinatorSettings {
    let oracle = &config.oracle;
    CoordinatorSettings {
        spec: SessionSpec {
            system_prompt: oracle
                .system_prompt
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            tools: coordinator_tools(),
            temperature: oracle.temperature,
            enable_search: oracle.enable_search,
        },
        followup_delay: Duration::from_millis(u64::from(config.coordinator.followup_delay_ms)),
        show_welcome: config.coordinator.show_welcome,
    }
}

/// Build the oracle for the configured provider.
pub fn build_oracle(config: &MedrouteConfig) -> Result<Arc<dyn Oracle>, AiError> {
    let oracle = &config.oracle;
    match oracle.provider {
        OracleProvider::Gemini => {
            let gemini = GeminiConfig::from_env(&oracle.api_key_env)?
                .with_model(oracle.model.clone())
                .with_max_tokens(oracle.max_output_tokens)
                .with_temperature(oracle.temperature)
                .with_base_url(oracle.base_url.clone())
                .with_timeouts(
                    Duration::from_secs(u64::from(oracle.connect_timeout_secs)),
                    Duration::from_secs(u64::from(oracle.request_timeout_secs)),
                );
            let client = GeminiClient::new(gemini)?;
            tracing::info!(model = %client.model(), "Gemini oracle ready");
            Ok(Arc::new(ChatOracle::new(Arc::new(client))))
        }
    }
}

/// Stand-in used when no oracle could be built. Every session request
/// fails with the original reason, so each turn ends in the apology message.
pub struct UnavailableOracle {
    reason: String,
}

impl UnavailableOracle {
    pub fn new(error: &AiError) -> Self {
        Self {
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl Oracle for UnavailableOracle {
    async fn create_session(&self, _spec: SessionSpec) -> Result<Box<dyn OracleSession>, AiError> {
        Err(AiError::NotConfigured(self.reason.clone()))
    }
}
