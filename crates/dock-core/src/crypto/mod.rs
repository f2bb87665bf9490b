//! Note encryption for Dock.
//!
//! Notes attached to dashboard items can be sealed under a master password:
//! - **PBKDF2-HMAC-SHA-256** (100,000 rounds) turns the password and a
//!   per-record salt into a 256-bit key
//! - **AES-256-GCM** encrypts and authenticates the note text
//!
//! ## Security Model
//!
//! - Fresh salt and IV for every encryption
//! - Wrong password and tampered data fail identically
//! - Derived keys are zeroized on drop and never cached across calls
//! - The master password is never stored
//!
//! We do NOT defend against:
//! - A compromised host / keylogger
//! - Brute force of weak passwords beyond KDF slowing

pub mod backend;
pub mod codec;
pub mod key;
pub mod password;
pub mod record;

pub use backend::{CryptoBackend, RustCryptoBackend, IV_LENGTH, SALT_LENGTH, TAG_LENGTH};
pub use codec::NoteCodec;
pub use key::{derive_key, DerivedKey, KEY_LENGTH, PBKDF2_ITERATIONS};
pub use password::{validate_password, MIN_PASSWORD_LENGTH};
pub use record::EncryptedRecord;

use crate::error::Result;

/// Encrypt a note with the default backend.
pub fn encrypt(plaintext: &str, password: &str) -> Result<EncryptedRecord> {
    NoteCodec::new().encrypt(plaintext, password)
}

/// Decrypt a note with the default backend.
pub fn decrypt(record: &EncryptedRecord, password: &str) -> Result<String> {
    NoteCodec::new().decrypt(record, password)
}
