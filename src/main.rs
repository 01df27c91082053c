// src/main.rs
use clap::Parser;
use mlb_stats_mcp::cli::{Args, is_config_command};
use mlb_stats_mcp::data_fetcher::MlbStatsClient;
use mlb_stats_mcp::logging::setup_logging;
use mlb_stats_mcp::{AppError, Config, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = Config::load().await?;
    args.apply_to(&mut config);
    config.validate()?;

    if is_config_command(&args) {
        if args.save_config {
            config.save().await?;
            println!("Config saved to {}", Config::get_config_path());
        }
        if args.list_config {
            config.display();
        }
        return Ok(());
    }

    // The guard must outlive the server so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!(
        "Starting {} v{}, logging to {}",
        mlb_stats_mcp::NAME,
        mlb_stats_mcp::VERSION,
        log_file_path
    );
    info!("Upstream: {}", config.api_base_url());

    let api = MlbStatsClient::from_config(&config)?;
    server::serve(&config, Arc::new(api)).await
}
