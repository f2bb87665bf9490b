use crate::app::AppContext;
use crate::cli::ItemCommand;

pub fn handle_item(ctx: &AppContext, command: &ItemCommand) -> anyhow::Result<()> {
    match command {
        ItemCommand::Add {
            category_id,
            name,
            link,
        } => {
            let (mut store, mut dashboard) = ctx.load()?;
            let id = dashboard.add_item(category_id, name, link)?;
            let link_dropped = dashboard.item(category_id, &id)?.link.is_empty();
            ctx.save(&mut store, &dashboard)?;

            if ctx.quiet() {
                println!("{}", id);
            } else {
                println!("Added item {}", id);
                if link_dropped && !link.trim().is_empty() {
                    eprintln!("Warning: \"{}\" is not a valid URL; link left empty", link);
                }
            }
        }
        ItemCommand::Edit {
            category_id,
            item_id,
            name,
            link,
        } => {
            let (mut store, mut dashboard) = ctx.load()?;
            let current = dashboard.item(category_id, item_id)?;
            let name = name.clone().unwrap_or_else(|| current.name.clone());
            let link = link.clone().unwrap_or_else(|| current.link.clone());
            dashboard.edit_item(category_id, item_id, &name, &link)?;
            ctx.save(&mut store, &dashboard)?;
            if !ctx.quiet() {
                println!("Updated item {}", item_id);
            }
        }
        ItemCommand::Rm {
            category_id,
            item_id,
        } => {
            let (mut store, mut dashboard) = ctx.load()?;
            let removed = dashboard.remove_item(category_id, item_id)?;
            ctx.save(&mut store, &dashboard)?;
            if !ctx.quiet() {
                println!("Removed item \"{}\"", removed.name);
                if removed
                    .info_details
                    .as_ref()
                    .is_some_and(|note| note.is_encrypted())
                {
                    eprintln!("Note: its encrypted note was discarded with it.");
                }
            }
        }
        ItemCommand::Move {
            category_id,
            positions,
        } => {
            let (mut store, mut dashboard) = ctx.load()?;
            dashboard.move_item(category_id, positions.from, positions.to)?;
            ctx.save(&mut store, &dashboard)?;
        }
    }
    Ok(())
}
