use crate::app::AppContext;
use crate::cli::{ListArgs, MoveArgs, TabCommand};
use crate::output::{print_json, print_tab_list};

pub fn handle_tab(ctx: &AppContext, command: &TabCommand) -> anyhow::Result<()> {
    match command {
        TabCommand::Add { name } => handle_add(ctx, name),
        TabCommand::Rename { id, name } => handle_rename(ctx, id, name),
        TabCommand::Rm { id } => handle_remove(ctx, id),
        TabCommand::Move(args) => handle_move(ctx, args),
        TabCommand::List(args) => handle_list(ctx, args),
    }
}

fn handle_add(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    let id = dashboard.add_tab(name)?;
    ctx.save(&mut store, &dashboard)?;

    if ctx.quiet() {
        println!("{}", id);
    } else {
        println!("Added tab {}", id);
    }
    Ok(())
}

fn handle_rename(ctx: &AppContext, id: &str, name: &str) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    if !dashboard.rename_tab(id, name)? {
        if !ctx.quiet() {
            println!("Tab name unchanged");
        }
        return Ok(());
    }
    ctx.save(&mut store, &dashboard)?;

    if !ctx.quiet() {
        println!("Renamed tab {}", id);
    }
    Ok(())
}

fn handle_remove(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    let removed = dashboard.remove_tab(id)?;
    ctx.save(&mut store, &dashboard)?;

    if !ctx.quiet() {
        println!(
            "Removed tab \"{}\" ({} shortcuts)",
            removed.name,
            removed.shortcuts.len()
        );
    }
    Ok(())
}

fn handle_move(ctx: &AppContext, args: &MoveArgs) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    dashboard.move_tab(args.from, args.to);
    ctx.save(&mut store, &dashboard)?;
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let (_store, dashboard) = ctx.load()?;
    if args.json {
        return print_json(&dashboard.tabs);
    }

    if !ctx.quiet() {
        let ui = &ctx.config()?.ui;
        println!("{} - {}", ui.app_name, ui.tagline);
        println!();
    }
    print_tab_list(&dashboard.tabs, ctx.quiet());
    Ok(())
}
