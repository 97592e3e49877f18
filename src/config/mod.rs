mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    load_with(
        env::var("CONFIG_PATH").ok().as_deref(),
        DEFAULT_CONFIG_PATH,
        env::var("LLM_API_KEY").ok(),
    )
    .await
}

/// Loads `config_path` if given, else `fallback_path` if it exists, else the
/// built-in defaults. A named `config_path` that cannot be read is an error.
pub async fn load_with(
    config_path: Option<&str>,
    fallback_path: &str,
    api_key: Option<String>,
) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => load_from(path).await?,
        None if Path::new(fallback_path).exists() => load_from(fallback_path).await?,
        None => {
            debug!("No {} found, using built-in defaults", fallback_path);
            Config::default()
        }
    };

    if let Some(api_key) = api_key {
        config.model.api_key = api_key;
    }

    Ok(config)
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;
    config.validate()?;

    Ok(config)
}
