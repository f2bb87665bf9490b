//! Store trait definition.
//!
//! The dashboard persists as a handful of JSON values under fixed keys. Any
//! key-value backend (a JSON file, memory, a browser store behind FFI) can
//! implement [`Store`] without the rest of the crate changing.

use crate::error::Result;

/// Key-value storage for dashboard sections.
///
/// Implementations must ensure:
/// - `put` replaces the whole value under a key
/// - a successful `put`/`remove`/`apply` is durable before it returns
/// - a failed write leaves the store's view unchanged
pub trait Store {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DockError::Storage` if the backend cannot persist the value.
    fn put(&mut self, key: &str, value: serde_json::Value) -> Result<()>;

    /// Delete `key`. Returns whether it existed.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// All keys currently stored.
    fn keys(&self) -> Result<Vec<String>>;

    /// Write `puts` and delete `removes` as one change.
    ///
    /// The default goes through `put` and `remove` one key at a time.
    /// Persistent backends override it so a failed write leaves every key
    /// as it was.
    fn apply(&mut self, puts: Vec<(&str, serde_json::Value)>, removes: &[&str]) -> Result<()> {
        for (key, value) in puts {
            self.put(key, value)?;
        }
        for key in removes {
            self.remove(key)?;
        }
        Ok(())
    }
}
