//! Master password checks.
//!
//! Applied only when a note is being sealed under a new password.
//! Decryption accepts whatever the user types.

use crate::error::{DockError, Result};

/// Minimum master password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate that a master password meets the minimum requirements.
///
/// # Requirements
///
/// - Not empty or only whitespace
/// - At least 8 characters long
///
/// # Examples
///
/// ```
/// use dock_core::crypto::validate_password;
///
/// assert!(validate_password("correct-horse").is_ok());
/// assert!(validate_password("short").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(DockError::InvalidInput(
            "Master password cannot be empty".to_string(),
        ));
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(DockError::InvalidInput(format!(
            "Master password must be at least {} characters (got {})",
            MIN_PASSWORD_LENGTH, length
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("correct-horse").is_ok());
        assert!(validate_password("battery staple with spaces").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let result = validate_password("short");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least 8 characters"));
    }

    #[test]
    fn test_password_blank() {
        assert!(validate_password("").is_err());
        assert!(validate_password("        ").is_err());
        assert!(validate_password("\n\t").is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8+ bytes
        assert!(validate_password("ééßß").is_err());
        assert!(validate_password("pässwörd").is_ok());
    }
}
