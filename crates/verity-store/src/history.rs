//! Bounded, most-recent-first history of analysis results.

use std::collections::VecDeque;

use verity_core::AnalysisResult;

use crate::error::PersistenceError;
use crate::kv::KeyValueStore;

/// Slot holding the whole history as one JSON array.
pub const HISTORY_KEY: &str = "analysis-history";

/// Default and maximum number of results kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Persisted analysis history.
///
/// The full list lives in memory and is written through to a single slot of
/// the backing [`KeyValueStore`] on every change. Eviction is FIFO by
/// insertion: reading an entry never moves it.
#[derive(Debug)]
pub struct ResultStore<K: KeyValueStore> {
    backend: K,
    entries: VecDeque<AnalysisResult>,
    capacity: usize,
}

impl<K: KeyValueStore> ResultStore<K> {
    /// Open the store with the default capacity of 50.
    ///
    /// A missing, empty, unreadable or corrupt slot opens as an empty history.
    pub fn open(backend: K) -> Self {
        Self::with_capacity(backend, DEFAULT_CAPACITY)
    }

    /// Open the store keeping at most `capacity` entries, clamped to
    /// `1..=DEFAULT_CAPACITY`.
    pub fn with_capacity(backend: K, capacity: usize) -> Self {
        let capacity = capacity.clamp(1, DEFAULT_CAPACITY);
        let mut entries = load_entries(&backend);
        if entries.len() > capacity {
            tracing::debug!(
                stored = entries.len(),
                capacity,
                "stored history exceeds capacity; truncating"
            );
            entries.truncate(capacity);
        }
        Self {
            backend,
            entries,
            capacity,
        }
    }

    /// Prepend `result`, evicting the oldest entries beyond capacity.
    ///
    /// The in-memory history is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the [`PersistenceError`] from the write-through as a non-fatal
    /// warning; the result is still listed for the rest of the session.
    pub fn append(&mut self, result: AnalysisResult) -> Result<(), PersistenceError> {
        self.entries.push_front(result);
        self.entries.truncate(self.capacity);
        self.persist()
    }

    /// Snapshot of the history, most recent first.
    #[must_use]
    pub fn list(&self) -> Vec<AnalysisResult> {
        self.entries.iter().cloned().collect()
    }

    /// Copy of the entry with `id`, if stored.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<AnalysisResult> {
        self.entries.iter().find(|entry| entry.id == id).cloned()
    }

    /// Copy of the most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<AnalysisResult> {
        self.entries.front().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns the [`PersistenceError`] from the write-through; the in-memory
    /// history is empty regardless.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.entries.clear();
        self.persist()
    }

    #[must_use]
    pub const fn backend(&self) -> &K {
        &self.backend
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string(&self.entries)?;
        self.backend.set(HISTORY_KEY, &blob).inspect_err(|error| {
            tracing::warn!(%error, entries = self.entries.len(), "failed to persist history");
        })
    }
}

fn load_entries<K: KeyValueStore>(backend: &K) -> VecDeque<AnalysisResult> {
    let raw = match backend.get(HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return VecDeque::new(),
        Err(error) => {
            tracing::warn!(%error, "history unreadable; starting empty");
            return VecDeque::new();
        }
    };

    if raw.trim().is_empty() {
        return VecDeque::new();
    }

    serde_json::from_str(&raw).unwrap_or_else(|error| {
        tracing::warn!(%error, "stored history is corrupt; starting empty");
        VecDeque::new()
    })
}
