//! Configuration loading from file system

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{ExplorerError, Result};

pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from ~/.ui-explorer/config.json
///
/// Returns Config::default() if the file is missing or cannot be parsed.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let config_path = default_config_path();

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match load_config_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
}

/// Load and parse a specific config file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|source| ExplorerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config =
        serde_json::from_str(&contents).map_err(|source| ExplorerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), "Successfully loaded config");
    Ok(config)
}
