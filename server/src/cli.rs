use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "pipeline-server")]
#[command(about = "HTTP service validating pipeline graphs", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[arg(short, long)]
    pub bind_address: Option<String>,

    /// HTTP port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Allowed CORS origins (comma-separated, `*` for any)
    #[arg(long)]
    pub allowed_origins: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pipeline-server"]).unwrap();
        assert_eq!(args.log_level, "info");
        assert!(args.config_path.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "pipeline-server",
            "--port",
            "9000",
            "--bind-address",
            "0.0.0.0",
            "--allowed-origins",
            "http://a.test, http://b.test",
            "-l",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.bind_address.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.allowed_origins.as_deref(), Some("http://a.test, http://b.test"));
        assert_eq!(args.log_level, "debug");
    }
}
