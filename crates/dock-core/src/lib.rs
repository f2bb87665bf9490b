//! # Dock Core
//!
//! Core library for Launch Dock, a personal start-page dashboard with
//! password-protected notes.
//!
//! This crate holds the data model, the note encryption codec and storage,
//! independent of the CLI.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2 + AES-256-GCM note codec with a pluggable backend
//! - **note**: Plaintext or encrypted note bodies and the overwrite policy
//! - **dashboard**: Tabs, shortcuts, categories and items
//! - **export**: JSON export/import documents
//! - **storage**: Key-value stores for dashboard sections

pub mod crypto;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod fs;
pub mod note;
pub mod storage;

pub use crypto::{EncryptedRecord, NoteCodec};
pub use dashboard::Dashboard;
pub use error::{DockError, Result};
pub use note::NoteBody;
pub use storage::Store;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
