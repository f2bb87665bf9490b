//! Master password handling with retry logic.

use std::io::IsTerminal;

use dialoguer::Password;
use secrecy::{ExposeSecret, SecretString};

use dock_core::crypto::validate_password;
use dock_core::DockError;

use crate::constants::{MAX_PASSWORD_ATTEMPTS, PASSWORD_ENV};
use crate::errors::CliError;

fn env_password() -> Option<SecretString> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}

fn no_tty_error() -> anyhow::Error {
    CliError::invalid_input(format!(
        "No password provided and no TTY available. Set {}.",
        PASSWORD_ENV
    ))
    .into()
}

fn prompt_password(interactive: bool) -> anyhow::Result<SecretString> {
    if !interactive {
        return Err(no_tty_error());
    }
    Password::new()
        .with_prompt("Master password")
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Password for sealing a note: DOCK_PASSWORD, or a confirmed prompt.
///
/// New passwords must pass `validate_password`.
pub fn new_password() -> anyhow::Result<SecretString> {
    let password = match env_password() {
        Some(password) => password,
        None => {
            if !std::io::stdin().is_terminal() {
                return Err(no_tty_error());
            }
            Password::new()
                .with_prompt("New master password")
                .with_confirmation("Confirm master password", "Passwords do not match")
                .interact()
                .map(SecretString::from)
                .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?
        }
    };
    validate_password(password.expose_secret())?;
    Ok(password)
}

/// Run `attempt` with the master password until it stops failing decryption.
///
/// DOCK_PASSWORD gets a single try. Interactive prompts allow three.
/// Any error other than a failed decryption is returned at once.
pub fn unlock_with_retry<T, F>(mut attempt: F) -> anyhow::Result<(T, SecretString)>
where
    F: FnMut(&str) -> dock_core::Result<T>,
{
    if let Some(password) = env_password() {
        return match attempt(password.expose_secret()) {
            Ok(value) => Ok((value, password)),
            Err(DockError::DecryptionFailed) => Err(CliError::auth_failed_with_hint(
                "Incorrect password.",
                format!("Hint: Check the {} environment variable.", PASSWORD_ENV),
            )
            .into()),
            Err(err) => Err(err.into()),
        };
    }

    let interactive = std::io::stdin().is_terminal();
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let password = prompt_password(interactive)?;
        match attempt(password.expose_secret()) {
            Ok(value) => return Ok((value, password)),
            Err(DockError::DecryptionFailed) => {
                let remaining = MAX_PASSWORD_ATTEMPTS.saturating_sub(attempts);
                if remaining == 0 {
                    return Err(CliError::auth_failed_with_hint(
                        "Too many failed password attempts.",
                        "Hint: If you forgot the password, the note cannot be recovered.\n      `dock note clear --force` discards it.",
                    )
                    .into());
                }
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
}
