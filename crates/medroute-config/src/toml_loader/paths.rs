//! Where the config file lives, and writing the commented template there.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use medroute_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "medroute";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/medroute/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("{action} {}: {e}", path.display()))
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("cannot create", parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(io_error("cannot create", path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_error("cannot write", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
