use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MedrouteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("oracle.temperature = 3 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: oracle.temperature = 3 is out of range"
        );
    }

    #[test]
    fn medroute_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: MedrouteError = config_err.into();
        assert!(matches!(err, MedrouteError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn medroute_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: MedrouteError = io_err.into();
        assert!(matches!(err, MedrouteError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }
}
