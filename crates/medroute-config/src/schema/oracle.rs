//! Oracle (language model endpoint) configuration.

use serde::{Deserialize, Serialize};

/// Which hosted model API answers coordinator turns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OracleProvider {
    #[default]
    Gemini,
}

/// Connection and generation settings for the oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    pub provider: OracleProvider,
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0). Kept low for routing.
    pub temperature: f64,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub connect_timeout_secs: u32,
    pub request_timeout_secs: u32,
    /// Attach the Google Search grounding tool to every turn.
    pub enable_search: bool,
    /// Replaces the built-in coordinator instruction when set.
    pub system_prompt: Option<String>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: OracleProvider::Gemini,
            model: "gemini-2.5-flash".into(),
            temperature: 0.2,
            max_output_tokens: 4096,
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            enable_search: true,
            system_prompt: None,
        }
    }
}
