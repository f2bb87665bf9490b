//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (data file, tab, category, item, note).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// A stored encrypted record is damaged.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable holding the master password for non-interactive use.
pub const PASSWORD_ENV: &str = "DOCK_PASSWORD";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DOCK_CONFIG";

/// Password prompts allowed before giving up on an encrypted note.
pub const MAX_PASSWORD_ATTEMPTS: u32 = 3;
