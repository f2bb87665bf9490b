//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use dock_core::DockError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (data file, tab, item, etc.)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password, too many attempts)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// Stored encrypted record is damaged
    Integrity(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Integrity(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Map a core error onto a CLI error, if it has a dedicated exit code.
    ///
    /// Storage, I/O and cipher failures return `None` and exit with 1.
    pub fn from_core(err: &DockError) -> Option<Self> {
        match err {
            DockError::NotFound(what) => Some(CliError::not_found(
                format!("{} not found", what),
                "Hint: Run `dock tab list` or `dock category list` to find IDs.",
            )),
            DockError::DecryptionFailed => Some(CliError::auth_failed_with_hint(
                err.to_string(),
                "Hint: There is no password recovery. Check DOCK_PASSWORD or try again.",
            )),
            err if err.is_integrity_error() => Some(CliError::Integrity(err.to_string())),
            DockError::Validation(_) | DockError::Duplicate(_) | DockError::InvalidInput(_) => {
                Some(CliError::InvalidInput(err.to_string()))
            }
            _ => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Integrity(_) => exit_codes::INTEGRITY_FAILED,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let cases = [
            (DockError::NotFound("Tab 'x'".into()), exit_codes::NOT_FOUND),
            (DockError::DecryptionFailed, exit_codes::AUTH_FAILED),
            (DockError::InvalidEncoding, exit_codes::INTEGRITY_FAILED),
            (
                DockError::MalformedRecord("iv".into()),
                exit_codes::INTEGRITY_FAILED,
            ),
            (DockError::Duplicate("name".into()), exit_codes::INVALID_INPUT),
        ];
        for (err, code) in cases {
            let mapped = CliError::from_core(&err).expect("mapped");
            assert_eq!(mapped.exit_code(), code, "{:?}", err);
        }
    }

    #[test]
    fn test_storage_errors_are_general() {
        assert!(CliError::from_core(&DockError::Storage("disk".into())).is_none());
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Item 'a' not found", "Hint: list items");
        assert_eq!(err.to_string(), "Item 'a' not found\nHint: list items");
    }
}
