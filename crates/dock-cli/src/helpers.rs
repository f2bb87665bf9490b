//! Input helper functions for the CLI.

use std::io::{self, IsTerminal, Read};
use std::process::Command;

use tempfile::NamedTempFile;

use crate::errors::CliError;

/// Note text from `--body`, piped stdin, or `$EDITOR`, in that order.
pub fn read_note_body(body: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = body {
        return non_empty_body(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return non_empty_body(buffer.trim_end().to_string());
    }

    read_body_from_editor()
}

fn non_empty_body(value: String) -> anyhow::Result<String> {
    if value.trim().is_empty() {
        return Err(CliError::invalid_input(
            "Note body is empty. Use `dock note clear` to remove a note.",
        )
        .into());
    }
    Ok(value)
}

/// Open $EDITOR to compose a note.
fn read_body_from_editor() -> anyhow::Result<String> {
    let editor = std::env::var("EDITOR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            CliError::invalid_input("$EDITOR is not set; use --body or pipe content via stdin")
        })?;

    let file = note_temp_file()?;
    let status = Command::new(editor)
        .arg(file.path())
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?;
    if !status.success() {
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(file.path())
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    drop(file);

    non_empty_body(contents.trim_end().to_string())
}

/// Owner-only scratch file for the editor, removed when dropped.
fn note_temp_file() -> anyhow::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix("dock_note_")
        .suffix(".md")
        .tempfile()
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_flag_wins() {
        assert_eq!(
            read_note_body(Some("from flag".to_string())).unwrap(),
            "from flag"
        );
    }

    #[test]
    fn test_blank_body_is_invalid_input() {
        let err = read_note_body(Some("   ".to_string())).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("cli error");
        assert_eq!(
            cli_err.exit_code(),
            crate::constants::exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_note_temp_file_is_private_and_removed() {
        let file = note_temp_file().unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o077, 0);
        }

        drop(file);
        assert!(!path.exists());
    }
}
