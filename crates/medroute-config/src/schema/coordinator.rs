//! Coordinator session configuration.

use serde::{Deserialize, Serialize};

/// Coordinator session behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Delay before the simulated "agent connected" message (valid range: 0-60000).
    pub followup_delay_ms: u32,
    /// Append a welcome System message when the session starts.
    pub show_welcome: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            followup_delay_ms: 1500,
            show_welcome: true,
        }
    }
}
