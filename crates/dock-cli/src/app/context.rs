//! Application context for the Dock CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use dock_core::storage::{load_dashboard, save_dashboard, JsonFileStore};
use dock_core::{Dashboard, NoteCodec};

use crate::cli::Cli;
use crate::config::DockConfig;
use crate::errors::CliError;

use super::resolver::{load_config, missing_data_message, resolve_config_path, resolve_data_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DockConfig>,
    codec: NoteCodec,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            codec: NoteCodec::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DockConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path()?))
    }

    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        resolve_data_path(self.cli, self.config()?)
    }

    pub fn codec(&self) -> &NoteCodec {
        &self.codec
    }

    /// Open the data file and load the dashboard.
    ///
    /// A missing data file is a not-found error pointing at `dock init`.
    pub fn load(&self) -> anyhow::Result<(JsonFileStore, Dashboard)> {
        let path = self.data_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_data_message(&path),
                "Hint: Run `dock init`, or pass --data /path/to/dock.json",
            )
            .into());
        }
        let store = JsonFileStore::open(&path)?;
        let dashboard = load_dashboard(&store)?;
        Ok((store, dashboard))
    }

    /// Persist the dashboard back to its data file.
    pub fn save(&self, store: &mut JsonFileStore, dashboard: &Dashboard) -> anyhow::Result<()> {
        save_dashboard(store, dashboard)?;
        log::debug!("saved {}", store.path().display());
        Ok(())
    }
}
