//! Dock CLI - a personal start page with password-protected notes
//!
//! This is the command-line interface for Launch Dock. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;

use clap::Parser;
use log::LevelFilter;

use dock_core::DockError;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{categories, init, items, misc, notes, shortcuts, tabs, transfer};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx) {
        exit_with(err)
    }
}

/// Route `log` output to stderr. RUST_LOG overrides the flag-derived level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Print the error and exit with the code its kind maps to.
fn exit_with(err: anyhow::Error) -> ! {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        cli_err.exit()
    }
    if let Some(cli_err) = err.downcast_ref::<DockError>().and_then(CliError::from_core) {
        cli_err.exit()
    }
    eprintln!("Error: {:#}", err);
    std::process::exit(1)
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Commands::Init => init::handle_init(ctx),
        Commands::Tab(command) => tabs::handle_tab(ctx, command),
        Commands::Shortcut(command) => shortcuts::handle_shortcut(ctx, command),
        Commands::Category(command) => categories::handle_category(ctx, command),
        Commands::Item(command) => items::handle_item(ctx, command),
        Commands::Note(command) => notes::handle_note(ctx, command),
        Commands::Export(args) => transfer::handle_export(ctx, args),
        Commands::Import(args) => transfer::handle_import(ctx, args),
        Commands::Config => misc::handle_config(ctx),
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}
