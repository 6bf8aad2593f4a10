//! Key-value persistence adapters.
//!
//! The history store talks to its medium only through [`KeyValueStore`], so
//! the same store logic runs against files on disk or an in-memory map.

use std::collections::HashMap;

use crate::error::PersistenceError;

/// A string-keyed slot store, in the spirit of browser local storage.
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace a slot's value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the medium rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Delete a slot. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the medium rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// Check a value against an optional byte quota.
pub(crate) fn check_quota(value: &str, quota: Option<u64>) -> Result<(), PersistenceError> {
    let Some(quota) = quota else {
        return Ok(());
    };
    let needed = value.len() as u64;
    if needed > quota {
        return Err(PersistenceError::QuotaExceeded { needed, quota });
    }
    Ok(())
}

/// In-process store. Contents vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    quota: Option<u64>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value is larger than `quota` bytes.
    #[must_use]
    pub const fn with_quota(mut self, quota: u64) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Seed a slot without quota checks, e.g. with a corrupt value.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        check_quota(value, self.quota)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_cycle() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn quota_rejects_large_values_and_keeps_old_value() {
        let mut store = MemoryStore::new().with_quota(4);
        store.set("k", "abcd").unwrap();
        let err = store.set("k", "abcde").unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::QuotaExceeded { needed: 5, quota: 4 }
        ));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("abcd"));
    }
}
