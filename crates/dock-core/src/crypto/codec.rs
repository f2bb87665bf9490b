//! Password-based encryption of note text.
//!
//! Format: PBKDF2-HMAC-SHA-256 (100,000 rounds, 16-byte salt) derives an
//! AES-256-GCM key; a fresh 12-byte IV is drawn per call. Salt, IV and
//! ciphertext||tag are stored as three base64 fields.

use zeroize::Zeroize;

use super::backend::{CryptoBackend, RustCryptoBackend, IV_LENGTH, SALT_LENGTH};
use super::key::PBKDF2_ITERATIONS;
use super::record::EncryptedRecord;
use crate::error::{DockError, Result};

/// Encrypts and decrypts note text under a master password.
///
/// Holds no per-call state: salts, IVs and keys live only inside a single
/// `encrypt`/`decrypt` call, so one codec can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NoteCodec<B = RustCryptoBackend> {
    backend: B,
}

impl NoteCodec<RustCryptoBackend> {
    /// Codec over the default RustCrypto backend.
    pub fn new() -> Self {
        Self {
            backend: RustCryptoBackend,
        }
    }
}

impl<B: CryptoBackend> NoteCodec<B> {
    /// Codec over a caller-supplied backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Encrypt `plaintext` under `password`.
    ///
    /// Two calls with identical inputs produce different records.
    ///
    /// # Errors
    ///
    /// - `DockError::RandomSourceUnavailable` if salt/IV cannot be generated
    /// - `DockError::EncryptionFailed` if the cipher fails
    ///
    /// # Examples
    ///
    /// ```
    /// use dock_core::crypto::NoteCodec;
    ///
    /// let codec = NoteCodec::new();
    /// let record = codec.encrypt("Buy milk", "correct-horse").unwrap();
    /// assert_eq!(codec.decrypt(&record, "correct-horse").unwrap(), "Buy milk");
    /// ```
    pub fn encrypt(&self, plaintext: &str, password: &str) -> Result<EncryptedRecord> {
        let mut salt = [0u8; SALT_LENGTH];
        let mut iv = [0u8; IV_LENGTH];
        self.backend.fill_random(&mut salt)?;
        self.backend.fill_random(&mut iv)?;

        let key = self.backend.derive_key(password, &salt, PBKDF2_ITERATIONS);
        let ciphertext = self.backend.seal(&key, &iv, plaintext.as_bytes())?;

        log::debug!(
            "sealed note: {} plaintext bytes -> {} ciphertext bytes",
            plaintext.len(),
            ciphertext.len()
        );
        Ok(EncryptedRecord::from_parts(&salt, &iv, &ciphertext))
    }

    /// Decrypt `record` with `password`.
    ///
    /// # Errors
    ///
    /// - `DockError::MalformedRecord` if a field is not base64 or has the
    ///   wrong length; raised before any key derivation
    /// - `DockError::DecryptionFailed` on a wrong password or tampered record
    /// - `DockError::InvalidEncoding` if the released bytes are not UTF-8
    pub fn decrypt(&self, record: &EncryptedRecord, password: &str) -> Result<String> {
        let decoded = record.decode()?;

        let key = self
            .backend
            .derive_key(password, &decoded.salt, PBKDF2_ITERATIONS);
        let plaintext = self.backend.open(&key, &decoded.iv, &decoded.ciphertext)?;

        log::debug!("opened note: {} bytes", plaintext.len());
        String::from_utf8(plaintext).map_err(|e| {
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            DockError::InvalidEncoding
        })
    }
}
