use crate::app::AppContext;
use crate::cli::CategoryCommand;
use crate::output::{print_category_list, print_json};

pub fn handle_category(ctx: &AppContext, command: &CategoryCommand) -> anyhow::Result<()> {
    match command {
        CategoryCommand::Add { name } => {
            let (mut store, mut dashboard) = ctx.load()?;
            let id = dashboard.add_category(name)?;
            ctx.save(&mut store, &dashboard)?;
            if ctx.quiet() {
                println!("{}", id);
            } else {
                println!("Added category {}", id);
            }
        }
        CategoryCommand::Rename { id, name } => {
            let (mut store, mut dashboard) = ctx.load()?;
            if dashboard.rename_category(id, name)? {
                ctx.save(&mut store, &dashboard)?;
                if !ctx.quiet() {
                    println!("Renamed category {}", id);
                }
            } else if !ctx.quiet() {
                println!("Category name unchanged");
            }
        }
        CategoryCommand::Rm { id } => {
            let (mut store, mut dashboard) = ctx.load()?;
            let removed = dashboard.remove_category(id)?;
            ctx.save(&mut store, &dashboard)?;
            if !ctx.quiet() {
                println!(
                    "Removed category \"{}\" ({} items)",
                    removed.name,
                    removed.items.len()
                );
            }
        }
        CategoryCommand::Move(args) => {
            let (mut store, mut dashboard) = ctx.load()?;
            dashboard.move_category(args.from, args.to);
            ctx.save(&mut store, &dashboard)?;
        }
        CategoryCommand::List(args) => {
            let (_store, dashboard) = ctx.load()?;
            if args.json {
                return print_json(&dashboard.categories);
            }
            print_category_list(&dashboard.categories, ctx.quiet());
        }
    }
    Ok(())
}
