mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`), then applies
/// the `OPENAI_API_KEY` override.
///
/// A missing default file falls back to built-in defaults; a missing file
/// named explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    load_with(env::var("CONFIG_PATH").ok(), env::var(API_KEY_ENV).ok()).await
}

/// `load()` with the environment lookups passed in.
pub async fn load_with(config_path: Option<String>, api_key: Option<String>) -> Result<Config> {
    let config = match config_path {
        Some(path) => load_from_path(&path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    Ok(config.with_api_key_override(api_key))
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Failed to read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
