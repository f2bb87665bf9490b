use chrono::Local;

use dock_core::export::{export_file_name, export_json, import_json};
use dock_core::fs::write_atomic;

use crate::app::AppContext;
use crate::cli::{ExportArgs, ImportArgs};
use crate::errors::CliError;

/// Write all dashboard data to `<export_file_name>-<ddMMyyyyHHmmss>.json`.
///
/// Encrypted notes are written as stored; nothing is decrypted.
pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let (_store, dashboard) = ctx.load()?;
    let json = export_json(&dashboard)?;

    let dir = match &args.out {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let name = export_file_name(ctx.config()?.export_base_name(), &Local::now());
    let path = dir.join(name);
    write_atomic(&path, json.as_bytes())?;

    if ctx.quiet() {
        println!("{}", path.display());
    } else {
        println!("Exported to {}", path.display());
        let encrypted = dashboard.encrypted_note_count();
        if encrypted > 0 {
            println!(
                "{} encrypted note{} exported as-is; they need the same password after import.",
                encrypted,
                if encrypted == 1 { "" } else { "s" }
            );
        }
    }
    Ok(())
}

/// Replace dashboard sections from an export file.
pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        CliError::not_found(
            format!("Cannot read {}: {}", args.file.display(), e),
            "Hint: Pass the path of a file written by `dock export`.",
        )
    })?;

    let (mut store, mut dashboard) = ctx.load()?;
    let report = import_json(&mut dashboard, &contents)?;
    if report.is_empty() {
        return Err(CliError::invalid_input(format!(
            "No dashboard data found in {}",
            args.file.display()
        ))
        .into());
    }
    ctx.save(&mut store, &dashboard)?;

    if !ctx.quiet() {
        if report.tabs_imported {
            println!("Imported {} tabs", dashboard.tabs.len());
        } else {
            eprintln!("Warning: no tab data in file; tabs left unchanged");
        }
        if report.categories_imported {
            println!("Imported {} categories", dashboard.categories.len());
        } else {
            eprintln!("Warning: no category data in file; categories left unchanged");
        }
    }
    Ok(())
}
