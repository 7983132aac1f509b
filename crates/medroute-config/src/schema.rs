//! Configuration schema types for medroute.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod coordinator;
mod oracle;
mod system;

pub use coordinator::*;
pub use oracle::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for medroute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedrouteConfig {
    pub oracle: OracleConfig,
    pub coordinator: CoordinatorConfig,
    pub logging: LoggingConfig,
}
