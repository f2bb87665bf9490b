//! Key derivation using PBKDF2-HMAC-SHA-256.
//!
//! Every encrypted note carries its own salt, so a key is derived per call
//! and dropped (and zeroized) as soon as the call returns.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

/// PBKDF2 iteration count for note keys.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A cryptographic key derived from a master password.
///
/// Key material is zeroized from memory when dropped and never printed.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    ///
    /// # Security
    ///
    /// The caller is responsible for ensuring the bytes come from a KDF.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for the cipher call at hand.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 256-bit key from a password and salt.
///
/// Same password + salt always yields the same key; the salt is stored
/// alongside the ciphertext so decryption can repeat the derivation.
///
/// # Examples
///
/// ```
/// use dock_core::crypto::{derive_key, PBKDF2_ITERATIONS};
///
/// let salt = [7u8; 16];
/// let key = derive_key("correct-horse", &salt, PBKDF2_ITERATIONS);
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> DerivedKey {
    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key_bytes);
    DerivedKey::from_bytes(key_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let salt = b"unique-salt-1234";

        let key1 = derive_key("test-password", salt, PBKDF2_ITERATIONS);
        let key2 = derive_key("test-password", salt, PBKDF2_ITERATIONS);

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("test-password", b"salt1-1234567890", PBKDF2_ITERATIONS);
        let key2 = derive_key("test-password", b"salt2-1234567890", PBKDF2_ITERATIONS);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = b"fixed-salt-12345";

        let key1 = derive_key("password-one", salt, PBKDF2_ITERATIONS);
        let key2 = derive_key("password-two", salt, PBKDF2_ITERATIONS);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_rfc7914_vector() {
        // PBKDF2-HMAC-SHA256, P="passwd", S="salt", c=1, first 32 bytes.
        let key = derive_key("passwd", b"salt", 1);
        assert_eq!(
            hex::encode(key.as_bytes()),
            "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc"
        );
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-password", b"salt-1234567890a", PBKDF2_ITERATIONS);

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
