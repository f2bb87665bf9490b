use dock_core::storage::JsonFileStore;
use dock_core::Dashboard;

use crate::app::{resolve_config_path, AppContext};
use crate::config::{write_config, DockConfig};

/// Write a default config (if none exists) and an empty data file.
///
/// Running it again is harmless: existing files are left as they are.
pub fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let data_path = ctx.data_path()?;

    if config_path.exists() {
        if !ctx.quiet() {
            println!("Config already exists at {}", config_path.display());
        }
    } else {
        write_config(&config_path, &DockConfig::new(&data_path))?;
        if !ctx.quiet() {
            println!("Wrote config to {}", config_path.display());
        }
    }

    if data_path.exists() {
        if !ctx.quiet() {
            println!("Data file already exists at {}", data_path.display());
        }
        return Ok(());
    }

    let mut store = JsonFileStore::create(&data_path)?;
    ctx.save(&mut store, &Dashboard::new())?;
    if !ctx.quiet() {
        println!("Initialized dock at {}", data_path.display());
    }
    Ok(())
}
