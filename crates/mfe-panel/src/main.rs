//! MFE entry panel - Entry Point

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// MFE entry panel server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "MFE_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    mfe_telemetry::init_logging()?;

    info!("Starting MFE panel v{}", env!("CARGO_PKG_VERSION"));

    let config = mfe_panel::AppConfig::load(args.config)?;
    info!(port = config.dashboard.port, "Configuration loaded");

    let app = mfe_panel::Application::new(config)?;
    app.run().await?;

    Ok(())
}
