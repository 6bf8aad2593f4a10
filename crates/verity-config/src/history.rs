//! Local analysis history settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Hard upper bound on history length; smaller values are allowed.
pub const MAX_HISTORY_CAPACITY: usize = 50;

const fn default_capacity() -> usize {
    MAX_HISTORY_CAPACITY
}

/// Storage quota for the history slot, matching typical browser storage.
const fn default_quota_bytes() -> u64 {
    5 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Directory holding the history slot. Empty means the platform data dir.
    #[serde(default)]
    pub dir: String,

    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Largest slot value that may be written, in bytes. Zero disables the quota.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            capacity: default_capacity(),
            quota_bytes: default_quota_bytes(),
        }
    }
}

impl HistoryConfig {
    /// Resolve the history directory: explicit `dir`, else `<data_dir>/verity`,
    /// else `./.verity`.
    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        if !self.dir.trim().is_empty() {
            return PathBuf::from(self.dir.trim());
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".verity"), |dir| dir.join("verity"))
    }

    #[must_use]
    pub const fn quota(&self) -> Option<u64> {
        if self.quota_bytes == 0 {
            None
        } else {
            Some(self.quota_bytes)
        }
    }
}
