//! `startup-mate` entry point.
//!
//! Loads `.env`, parses arguments, initialises logging and runs the web
//! server until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mate_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.server_config();
    tracing::debug!(?config, "Starting web server");

    mate_axum::start_server(config).await
}
