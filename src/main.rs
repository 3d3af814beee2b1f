use anyhow::Result;
use prompt_relay::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Accepts a plain level, or a directive list such as `prompt_relay=debug`
fn validate_log_level(level: &str) -> Result<EnvFilter> {
    let valid = level.parse::<LevelFilter>().is_ok()
        || (level.contains('=') && EnvFilter::try_new(level).is_ok());

    if !valid {
        anyhow::bail!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        );
    }

    Ok(EnvFilter::new(level))
}

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

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match validate_log_level(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting prompt-relay with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
