//! Configuration loading from the file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use super::types::Config;
use crate::error::{DispatchError, Result};

/// Resolve the config path: `$SQUAD_CONFIG` if set, else ~/.squad/config.json
pub fn config_path() -> PathBuf {
    let raw = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&raw).as_ref())
}

/// Load configuration, falling back to defaults.
///
/// A missing file is normal and silently yields `Config::default()`. A file that
/// exists but can't be read or parsed is logged as a warning and also yields defaults.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let path = config_path();

    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match load_config_from(&path) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
}

/// Strict variant of [`load_config`] for a specific path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| DispatchError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str::<Config>(content.trim()).map_err(|source| DispatchError::ConfigParse {
        path: path.display().to_string(),
        source,
    })
}
