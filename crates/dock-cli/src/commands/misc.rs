use clap::CommandFactory;
use clap_complete::generate;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::Cli;
use crate::config::DockConfig;

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "dock", &mut std::io::stdout());
    Ok(())
}

/// Print the effective configuration, with the data path fully resolved.
pub fn handle_config(ctx: &AppContext) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let data_path = ctx.data_path()?;
    let mut effective: DockConfig = ctx.config()?.clone();
    effective.dock.data_path = Some(data_path.to_string_lossy().to_string());

    if !ctx.quiet() {
        let state = if config_path.exists() {
            ""
        } else {
            " (not found, using defaults)"
        };
        println!("# config: {}{}", config_path.display(), state);
    }
    let rendered =
        toml::to_string_pretty(&effective).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    print!("{}", rendered);
    Ok(())
}
