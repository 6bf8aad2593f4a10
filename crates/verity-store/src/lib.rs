//! # verity-store
//!
//! Bounded, persisted history of analysis results.
//!
//! [`ResultStore`] keeps the 50 most recent results, most recent first, and
//! writes the whole list as one JSON blob under the `"analysis-history"` slot
//! of a pluggable [`KeyValueStore`]:
//! - [`FileStore`] for durable history under a data directory
//! - [`MemoryStore`] for tests and throwaway sessions
//!
//! Storage failures never escape as hard errors: a bad slot opens empty and a
//! failed write is handed back as a warning while memory stays current.

mod error;
mod file;
mod history;
mod kv;

pub use error::PersistenceError;
pub use file::FileStore;
pub use history::{DEFAULT_CAPACITY, HISTORY_KEY, ResultStore};
pub use kv::{KeyValueStore, MemoryStore};
