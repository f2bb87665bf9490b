//! Path resolution for config and data files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_path, read_config, DockConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking DOCK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when there is none.
pub fn load_config(path: &Path) -> anyhow::Result<DockConfig> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(DockConfig::default());
    }
    read_config(path)
}

/// Resolve the data file path: `--data`/DOCK_DATA, then config, then the XDG default.
pub fn resolve_data_path(cli: &Cli, config: &DockConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.data.clone() {
        return Ok(path);
    }
    if let Some(path) = config
        .dock
        .data_path
        .as_deref()
        .filter(|value| !value.trim().is_empty())
    {
        return Ok(PathBuf::from(path));
    }
    default_data_path()
}

/// Error message when the data file is missing.
pub fn missing_data_message(path: &Path) -> String {
    format!("No dock data found at {}", path.display())
}
