//! Market session clock - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Market session clock service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via MCLOCK_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Compute one snapshot, log it, and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    mclock_telemetry::init_logging()?;

    info!("Starting mclock v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > MCLOCK_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("MCLOCK_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");

    let config = mclock_app::AppConfig::from_file(&config_path)?;

    let app = mclock_app::Application::new(config)?;

    if args.once {
        app.run_once();
        return Ok(());
    }

    app.run().await?;

    Ok(())
}
