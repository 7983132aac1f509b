use std::path::PathBuf;

use clap::Parser;

/// medroute: routes hospital operations requests to specialist agents.
#[derive(Parser, Debug)]
#[command(name = "medroute", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "medroute=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model override (e.g. "gemini-2.5-pro").
    #[arg(long)]
    pub model: Option<String>,

    /// Send one message, wait for any agent follow-up, then exit.
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive_mode() {
        let args = Args::parse_from(["medroute"]);
        assert!(args.config.is_none());
        assert!(args.message.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn parses_one_shot_flags() {
        let args = Args::parse_from([
            "medroute",
            "--config",
            "/tmp/medroute.toml",
            "--model",
            "gemini-2.5-pro",
            "-m",
            "show history for patient RM-001",
            "--log-level",
            "medroute=debug",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/medroute.toml")));
        assert_eq!(args.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(args.message.as_deref(), Some("show history for patient RM-001"));
        assert_eq!(args.log_level.as_deref(), Some("medroute=debug"));
    }
}
