//! Error types for Dock core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Dock operations.
pub type Result<T> = std::result::Result<T, DockError>;

/// Core error type for Dock operations.
#[derive(Debug, Error)]
pub enum DockError {
    /// No secure random source could fill the salt/IV
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// The cipher failed while sealing a note
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Encrypted record fields are not valid base64 or have the wrong length
    #[error("Malformed encrypted record: {0}")]
    MalformedRecord(String),

    /// Authentication tag mismatch. Covers both a wrong password and
    /// tampered bytes; the two are never distinguished.
    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    /// Decrypted bytes are not valid UTF-8
    #[error("Decrypted note is not valid UTF-8")]
    InvalidEncoding,

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entry with the same key already exists
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl DockError {
    /// True for errors that indicate the stored record itself is damaged,
    /// as opposed to a bad password.
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            DockError::MalformedRecord(_) | DockError::InvalidEncoding
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_failed_message_is_generic() {
        let message = DockError::DecryptionFailed.to_string();
        assert!(message.contains("wrong password or corrupted data"));
    }

    #[test]
    fn test_integrity_classification() {
        assert!(DockError::InvalidEncoding.is_integrity_error());
        assert!(DockError::MalformedRecord("salt".into()).is_integrity_error());
        assert!(!DockError::DecryptionFailed.is_integrity_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DockError = io.into();
        assert!(matches!(err, DockError::Io { .. }));
    }
}
