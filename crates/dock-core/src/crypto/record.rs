//! At-rest representation of an encrypted note.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::backend::{IV_LENGTH, SALT_LENGTH, TAG_LENGTH};
use crate::error::{DockError, Result};

/// An encrypted note as stored: three base64 fields.
///
/// Records are replaced wholesale on every save; nothing patches one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedRecord {
    /// AES-GCM output (ciphertext followed by the 16-byte tag)
    pub ciphertext: String,

    /// 12-byte nonce
    pub iv: String,

    /// 16-byte PBKDF2 salt
    pub salt: String,
}

/// Raw bytes of a record whose lengths have been checked.
#[derive(Debug)]
pub(crate) struct DecodedRecord {
    pub salt: [u8; SALT_LENGTH],
    pub iv: [u8; IV_LENGTH],
    pub ciphertext: Vec<u8>,
}

impl EncryptedRecord {
    pub(crate) fn from_parts(salt: &[u8], iv: &[u8], ciphertext: &[u8]) -> Self {
        Self {
            ciphertext: STANDARD.encode(ciphertext),
            iv: STANDARD.encode(iv),
            salt: STANDARD.encode(salt),
        }
    }

    /// Decode all three fields and check their lengths.
    pub(crate) fn decode(&self) -> Result<DecodedRecord> {
        let salt = decode_fixed::<SALT_LENGTH>("salt", &self.salt)?;
        let iv = decode_fixed::<IV_LENGTH>("iv", &self.iv)?;
        let ciphertext = decode_field("ciphertext", &self.ciphertext)?;
        if ciphertext.len() < TAG_LENGTH {
            return Err(DockError::MalformedRecord(format!(
                "ciphertext must be at least {} bytes (got {})",
                TAG_LENGTH,
                ciphertext.len()
            )));
        }
        Ok(DecodedRecord {
            salt,
            iv,
            ciphertext,
        })
    }
}

fn decode_field(name: &str, value: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|e| DockError::MalformedRecord(format!("{} is not valid base64: {}", name, e)))
}

fn decode_fixed<const N: usize>(name: &str, value: &str) -> Result<[u8; N]> {
    let bytes = decode_field(name, value)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        DockError::MalformedRecord(format!("{} must be {} bytes (got {})", name, N, len))
    })
}
