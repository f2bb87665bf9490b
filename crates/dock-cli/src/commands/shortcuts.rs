use dock_core::dashboard::domain_name;

use crate::app::AppContext;
use crate::cli::ShortcutCommand;

pub fn handle_shortcut(ctx: &AppContext, command: &ShortcutCommand) -> anyhow::Result<()> {
    match command {
        ShortcutCommand::Add { tab_id, url, title } => {
            let (mut store, mut dashboard) = ctx.load()?;
            dashboard.add_shortcut(tab_id, url, title)?;
            ctx.save(&mut store, &dashboard)?;
            if !ctx.quiet() {
                println!("Added shortcut to {}", domain_name(url.trim()));
            }
        }
        ShortcutCommand::Rm { tab_id, url } => {
            let (mut store, mut dashboard) = ctx.load()?;
            let removed = dashboard.remove_shortcut(tab_id, url)?;
            ctx.save(&mut store, &dashboard)?;
            if !ctx.quiet() {
                println!("Removed shortcut \"{}\"", removed.title);
            }
        }
        ShortcutCommand::Move { tab_id, positions } => {
            let (mut store, mut dashboard) = ctx.load()?;
            dashboard.move_shortcut(tab_id, positions.from, positions.to)?;
            ctx.save(&mut store, &dashboard)?;
        }
    }
    Ok(())
}
