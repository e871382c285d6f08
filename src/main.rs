use anyhow::Result;
use chat_gateway::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides the config file
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .is_err()
    {
        eprintln!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            log_level
        );
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .init();

    info!("Starting chat gateway with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
