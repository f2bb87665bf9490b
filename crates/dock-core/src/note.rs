//! Notes attached to dashboard items.
//!
//! A note is either plain text or an [`EncryptedRecord`]. On disk the two
//! are told apart by shape (string vs. object), which keeps exports written
//! before encryption existed importable.

use serde::{Deserialize, Serialize};

use crate::crypto::{validate_password, CryptoBackend, EncryptedRecord, NoteCodec};
use crate::error::{DockError, Result};

/// The body of an item note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteBody {
    /// Sealed under the master password
    Encrypted(EncryptedRecord),

    /// Stored as-is
    Plaintext(String),
}

impl NoteBody {
    /// Wrap plain text.
    pub fn plaintext(text: impl Into<String>) -> Self {
        NoteBody::Plaintext(text.into())
    }

    /// Encrypt `text` under a new master password.
    ///
    /// The password must pass [`validate_password`].
    pub fn seal<B: CryptoBackend>(text: &str, codec: &NoteCodec<B>, password: &str) -> Result<Self> {
        validate_password(password)?;
        Ok(NoteBody::Encrypted(codec.encrypt(text, password)?))
    }

    /// Whether the note is sealed.
    pub fn is_encrypted(&self) -> bool {
        matches!(self, NoteBody::Encrypted(_))
    }

    /// Recover the note text.
    ///
    /// Plain notes ignore `password`. Encrypted notes need one.
    pub fn reveal<B: CryptoBackend>(
        &self,
        codec: &NoteCodec<B>,
        password: Option<&str>,
    ) -> Result<String> {
        match self {
            NoteBody::Plaintext(text) => Ok(text.clone()),
            NoteBody::Encrypted(record) => {
                let password = password.ok_or_else(password_required)?;
                codec.decrypt(record, password)
            }
        }
    }

    /// Produce the body that replaces this one when the user saves `new_text`.
    ///
    /// If the current body is encrypted, `password` must decrypt it; otherwise
    /// the decryption error is returned and the caller keeps the old record.
    /// This is what stops an undecryptable note from being overwritten.
    ///
    /// An encrypted note stays encrypted: the new text is sealed again under
    /// the password that opened it, whatever `encrypt` says. Going back to plain
    /// text is [`NoteBody::decrypted`]. For a plain note, `encrypt` seals the
    /// new text under `password`.
    pub fn replace<B: CryptoBackend>(
        &self,
        new_text: &str,
        codec: &NoteCodec<B>,
        password: Option<&str>,
        encrypt: bool,
    ) -> Result<NoteBody> {
        if let NoteBody::Encrypted(record) = self {
            let password = password.ok_or_else(password_required)?;
            codec.decrypt(record, password)?;
            return Ok(NoteBody::Encrypted(codec.encrypt(new_text, password)?));
        }

        if encrypt {
            let password = password.ok_or_else(password_required)?;
            return NoteBody::seal(new_text, codec, password);
        }
        Ok(NoteBody::plaintext(new_text))
    }

    /// Seal a plain note in place. Already-encrypted notes are rejected.
    pub fn encrypted<B: CryptoBackend>(&self, codec: &NoteCodec<B>, password: &str) -> Result<NoteBody> {
        match self {
            NoteBody::Plaintext(text) => NoteBody::seal(text, codec, password),
            NoteBody::Encrypted(_) => Err(DockError::InvalidInput(
                "Note is already encrypted".to_string(),
            )),
        }
    }

    /// Turn an encrypted note back into plain text. Plain notes are rejected.
    pub fn decrypted<B: CryptoBackend>(&self, codec: &NoteCodec<B>, password: &str) -> Result<NoteBody> {
        match self {
            NoteBody::Encrypted(record) => Ok(NoteBody::plaintext(codec.decrypt(record, password)?)),
            NoteBody::Plaintext(_) => Err(DockError::InvalidInput(
                "Note is not encrypted".to_string(),
            )),
        }
    }
}

/// Human-readable size of a note, e.g. `"1.50 KB (1536 bytes)"`.
pub fn size_label(text: &str) -> String {
    let bytes = text.len();
    format!("{:.2} KB ({} bytes)", bytes as f64 / 1024.0, bytes)
}

fn password_required() -> DockError {
    DockError::InvalidInput("Master password required for encrypted note".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "correct-horse";

    #[test]
    fn test_plain_string_deserializes_as_plaintext() {
        let body: NoteBody = serde_json::from_str("\"remember the milk\"").unwrap();
        assert_eq!(body, NoteBody::plaintext("remember the milk"));
    }

    #[test]
    fn test_record_object_deserializes_as_encrypted() {
        let json = r#"{"ciphertext":"AAAA","iv":"BBBB","salt":"CCCC"}"#;
        let body: NoteBody = serde_json::from_str(json).unwrap();
        assert!(body.is_encrypted());
    }

    #[test]
    fn test_seal_and_reveal() {
        let codec = NoteCodec::new();
        let body = NoteBody::seal("secret", &codec, PASSWORD).unwrap();
        assert!(body.is_encrypted());
        assert_eq!(body.reveal(&codec, Some(PASSWORD)).unwrap(), "secret");
    }

    #[test]
    fn test_seal_rejects_weak_password() {
        let codec = NoteCodec::new();
        let result = NoteBody::seal("secret", &codec, "short");
        assert!(matches!(result, Err(DockError::InvalidInput(_))));
    }

    #[test]
    fn test_reveal_encrypted_without_password() {
        let codec = NoteCodec::new();
        let body = NoteBody::seal("secret", &codec, PASSWORD).unwrap();
        assert!(matches!(
            body.reveal(&codec, None),
            Err(DockError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_replace_plain_note() {
        let codec = NoteCodec::new();
        let body = NoteBody::plaintext("old");
        let next = body.replace("new", &codec, None, false).unwrap();
        assert_eq!(next, NoteBody::plaintext("new"));
    }

    #[test]
    fn test_replace_encrypted_with_wrong_password_is_refused() {
        let codec = NoteCodec::new();
        let body = NoteBody::seal("original", &codec, PASSWORD).unwrap();

        let result = body.replace("placeholder", &codec, Some("wrong-password"), true);
        assert!(matches!(result, Err(DockError::DecryptionFailed)));

        // The original record still opens.
        assert_eq!(body.reveal(&codec, Some(PASSWORD)).unwrap(), "original");
    }

    #[test]
    fn test_replace_encrypted_without_password_is_refused() {
        let codec = NoteCodec::new();
        let body = NoteBody::seal("original", &codec, PASSWORD).unwrap();
        assert!(body.replace("new", &codec, None, false).is_err());
    }

    #[test]
    fn test_replace_encrypted_reseals_with_fresh_record() {
        let codec = NoteCodec::new();
        let body = NoteBody::seal("original", &codec, PASSWORD).unwrap();

        let next = body.replace("updated", &codec, Some(PASSWORD), true).unwrap();
        assert_ne!(next, body);
        assert_eq!(next.reveal(&codec, Some(PASSWORD)).unwrap(), "updated");
    }

    #[test]
    fn test_replace_encrypted_stays_encrypted_without_flag() {
        let codec = NoteCodec::new();
        let body = NoteBody::seal("PIN 4921", &codec, PASSWORD).unwrap();

        let next = body.replace("PIN 7777", &codec, Some(PASSWORD), false).unwrap();
        assert!(next.is_encrypted());
        assert_eq!(next.reveal(&codec, Some(PASSWORD)).unwrap(), "PIN 7777");
    }

    #[test]
    fn test_encrypted_and_decrypted_transitions() {
        let codec = NoteCodec::new();
        let plain = NoteBody::plaintext("text");

        let sealed = plain.encrypted(&codec, PASSWORD).unwrap();
        assert!(sealed.encrypted(&codec, PASSWORD).is_err());

        let opened = sealed.decrypted(&codec, PASSWORD).unwrap();
        assert_eq!(opened, plain);
        assert!(opened.decrypted(&codec, PASSWORD).is_err());
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(""), "0.00 KB (0 bytes)");
        assert_eq!(size_label(&"a".repeat(1536)), "1.50 KB (1536 bytes)");
    }
}
