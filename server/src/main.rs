//! Pipeline validation service - main entry point

use pipeline_server::{api::ApiServer, cli, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    init_logging(&args);

    info!("Starting pipeline server v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    info!("Allowed origins: {:?}", config.cors.allowed_origins);

    let api_server = ApiServer::new(config)?;
    api_server.start().await?;

    Ok(())
}

fn init_logging(args: &cli::Args) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
