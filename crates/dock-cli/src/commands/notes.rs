use secrecy::ExposeSecret;

use dock_core::note::size_label;
use dock_core::NoteBody;

use crate::app::{new_password, unlock_with_retry, AppContext};
use crate::cli::{NoteCommand, NoteTarget};
use crate::errors::CliError;
use crate::helpers::read_note_body;
use crate::output::{note_json, print_json, print_note};

pub fn handle_note(ctx: &AppContext, command: &NoteCommand) -> anyhow::Result<()> {
    match command {
        NoteCommand::Set {
            target,
            body,
            encrypt,
        } => handle_set(ctx, target, body.clone(), *encrypt),
        NoteCommand::Show { target, json } => handle_show(ctx, target, *json),
        NoteCommand::Encrypt { target } => handle_encrypt(ctx, target),
        NoteCommand::Decrypt { target } => handle_decrypt(ctx, target),
        NoteCommand::Clear { target, force } => handle_clear(ctx, target, *force),
    }
}

fn no_note(target: &NoteTarget) -> anyhow::Error {
    CliError::not_found(
        format!("Item {} has no note", target.item_id),
        format!(
            "Hint: Run `dock note set {} {}` to write one.",
            target.category_id, target.item_id
        ),
    )
    .into()
}

fn handle_set(
    ctx: &AppContext,
    target: &NoteTarget,
    body: Option<String>,
    encrypt: bool,
) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    let current = dashboard
        .item(&target.category_id, &target.item_id)?
        .info_details
        .clone();
    let text = read_note_body(body)?;
    let codec = ctx.codec();

    // An encrypted note is only replaced once its password has opened it,
    // and the new text is sealed again under that password.
    let note = match current {
        Some(current) if current.is_encrypted() => {
            let (note, _) = unlock_with_retry(|password| {
                current.replace(&text, codec, Some(password), encrypt)
            })?;
            note
        }
        _ if encrypt => {
            let password = new_password()?;
            NoteBody::seal(&text, codec, password.expose_secret())?
        }
        _ => NoteBody::plaintext(text.as_str()),
    };

    let encrypted = note.is_encrypted();
    dashboard.set_note(&target.category_id, &target.item_id, Some(note))?;
    ctx.save(&mut store, &dashboard)?;

    if !ctx.quiet() {
        println!(
            "Saved {} note ({})",
            if encrypted { "encrypted" } else { "plain" },
            size_label(&text)
        );
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, target: &NoteTarget, json: bool) -> anyhow::Result<()> {
    let (_store, dashboard) = ctx.load()?;
    let item = dashboard.item(&target.category_id, &target.item_id)?;
    let note = item.info_details.as_ref().ok_or_else(|| no_note(target))?;

    let text = if note.is_encrypted() {
        let (text, _) = unlock_with_retry(|password| note.reveal(ctx.codec(), Some(password)))?;
        text
    } else {
        note.reveal(ctx.codec(), None)?
    };

    if json {
        return print_json(&note_json(&target.category_id, item, &text));
    }
    print_note(item, &text, ctx.quiet());
    Ok(())
}

fn handle_encrypt(ctx: &AppContext, target: &NoteTarget) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    let note = dashboard
        .item(&target.category_id, &target.item_id)?
        .info_details
        .clone()
        .ok_or_else(|| no_note(target))?;
    if note.is_encrypted() {
        return Err(CliError::invalid_input("Note is already encrypted").into());
    }

    let password = new_password()?;
    let sealed = note.encrypted(ctx.codec(), password.expose_secret())?;
    dashboard.set_note(&target.category_id, &target.item_id, Some(sealed))?;
    ctx.save(&mut store, &dashboard)?;

    if !ctx.quiet() {
        println!("Encrypted note on item {}", target.item_id);
    }
    Ok(())
}

fn handle_decrypt(ctx: &AppContext, target: &NoteTarget) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    let note = dashboard
        .item(&target.category_id, &target.item_id)?
        .info_details
        .clone()
        .ok_or_else(|| no_note(target))?;
    if !note.is_encrypted() {
        return Err(CliError::invalid_input("Note is not encrypted").into());
    }

    let (plain, _) = unlock_with_retry(|password| note.decrypted(ctx.codec(), password))?;
    dashboard.set_note(&target.category_id, &target.item_id, Some(plain))?;
    ctx.save(&mut store, &dashboard)?;

    if !ctx.quiet() {
        println!("Decrypted note on item {}", target.item_id);
        eprintln!("Warning: the note is now stored as plain text.");
    }
    Ok(())
}

fn handle_clear(ctx: &AppContext, target: &NoteTarget, force: bool) -> anyhow::Result<()> {
    let (mut store, mut dashboard) = ctx.load()?;
    let note = match dashboard
        .item(&target.category_id, &target.item_id)?
        .info_details
        .clone()
    {
        Some(note) => note,
        None => {
            if !ctx.quiet() {
                println!("Item {} has no note", target.item_id);
            }
            return Ok(());
        }
    };

    if note.is_encrypted() {
        if force {
            log::warn!("discarding encrypted note on {} without its password", target.item_id);
        } else {
            unlock_with_retry(|password| note.reveal(ctx.codec(), Some(password)))?;
        }
    }

    dashboard.set_note(&target.category_id, &target.item_id, None)?;
    ctx.save(&mut store, &dashboard)?;

    if !ctx.quiet() {
        println!("Cleared note on item {}", target.item_id);
    }
    Ok(())
}
