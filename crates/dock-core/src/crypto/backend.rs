//! Cryptographic primitives behind the note codec.
//!
//! The codec never touches a cipher or RNG directly; it goes through a
//! [`CryptoBackend`], so any library that offers secure random bytes,
//! PBKDF2-SHA-256 and AES-256-GCM can be swapped in.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use super::key::{derive_key, DerivedKey};
use crate::error::{DockError, Result};

/// Length of the AES-GCM nonce in bytes.
pub const IV_LENGTH: usize = 12;

/// Length of the PBKDF2 salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of the AES-GCM authentication tag in bytes.
pub const TAG_LENGTH: usize = 16;

/// Primitive operations the note codec depends on.
pub trait CryptoBackend: Send + Sync {
    /// Fill `dest` with cryptographically secure random bytes.
    ///
    /// Returns `DockError::RandomSourceUnavailable` when no secure source exists.
    fn fill_random(&self, dest: &mut [u8]) -> Result<()>;

    /// Derive a 256-bit key with PBKDF2-HMAC-SHA-256.
    fn derive_key(&self, password: &str, salt: &[u8], iterations: u32) -> DerivedKey;

    /// AES-256-GCM encrypt with no associated data. Output is ciphertext || tag.
    fn seal(&self, key: &DerivedKey, iv: &[u8; IV_LENGTH], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// AES-256-GCM decrypt. Fails with `DockError::DecryptionFailed` on tag mismatch.
    fn open(&self, key: &DerivedKey, iv: &[u8; IV_LENGTH], ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Default backend built on the RustCrypto crates and the OS RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend;

impl CryptoBackend for RustCryptoBackend {
    fn fill_random(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest)
            .map_err(|e| DockError::RandomSourceUnavailable(e.to_string()))
    }

    fn derive_key(&self, password: &str, salt: &[u8], iterations: u32) -> DerivedKey {
        derive_key(password, salt, iterations)
    }

    fn seal(&self, key: &DerivedKey, iv: &[u8; IV_LENGTH], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| DockError::EncryptionFailed(e.to_string()))?;
        cipher
            .encrypt(Nonce::from_slice(iv), plaintext)
            .map_err(|e| DockError::EncryptionFailed(e.to_string()))
    }

    fn open(&self, key: &DerivedKey, iv: &[u8; IV_LENGTH], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|_| DockError::DecryptionFailed)?;
        cipher
            .decrypt(Nonce::from_slice(iv), ciphertext)
            .map_err(|_| DockError::DecryptionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_random_varies() {
        let backend = RustCryptoBackend;
        let mut a = [0u8; SALT_LENGTH];
        let mut b = [0u8; SALT_LENGTH];
        backend.fill_random(&mut a).unwrap();
        backend.fill_random(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seal_appends_tag() {
        let backend = RustCryptoBackend;
        let key = DerivedKey::from_bytes([1u8; 32]);
        let iv = [2u8; IV_LENGTH];

        let sealed = backend.seal(&key, &iv, b"hello").unwrap();
        assert_eq!(sealed.len(), 5 + TAG_LENGTH);

        let opened = backend.open(&key, &iv, &sealed).unwrap();
        assert_eq!(opened, b"hello");
    }

    #[test]
    fn test_open_with_other_key_fails() {
        let backend = RustCryptoBackend;
        let iv = [2u8; IV_LENGTH];
        let sealed = backend
            .seal(&DerivedKey::from_bytes([1u8; 32]), &iv, b"hello")
            .unwrap();

        let result = backend.open(&DerivedKey::from_bytes([9u8; 32]), &iv, &sealed);
        assert!(matches!(result, Err(DockError::DecryptionFailed)));
    }
}
