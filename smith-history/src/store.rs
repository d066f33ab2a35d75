//! File-backed history store.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{HistoryEntry, HistoryError, Result};

/// Number of entries kept when no limit is configured.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Bounded, deduplicating history persisted as a JSON array.
///
/// Every call reads the file and every save rewrites it; nothing is cached
/// in memory.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
}

impl HistoryStore {
    /// Use the history file at `path`. The file is created on first save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Keep at most `max_entries` entries across all modules.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// All entries, newest first.
    ///
    /// A missing or unreadable file is an empty history.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "cannot read history, treating as empty");
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }
        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), %err, "corrupt history, treating as empty");
            Vec::new()
        })
    }

    /// Record `input` for `module` as the most recent entry.
    ///
    /// Blank input is ignored. An existing entry with the same module and
    /// input is replaced, and the oldest entries are evicted beyond the
    /// limit. Returns whether anything was written.
    pub fn save(&self, module: &str, input: &str, extra: Map<String, Value>) -> Result<bool> {
        if input.trim().is_empty() {
            debug!(module, "skipping blank input");
            return Ok(false);
        }

        let mut entries = self.entries();
        entries.retain(|entry| !entry.matches(module, input));
        entries.insert(0, HistoryEntry::new(module, input, extra));
        entries.truncate(self.max_entries);

        self.write(&entries)?;
        debug!(module, count = entries.len(), "history saved");
        Ok(true)
    }

    /// Most recent input for `module`, or an empty string.
    pub fn last(&self, module: &str) -> String {
        self.entries()
            .into_iter()
            .find(|entry| entry.module == module)
            .map(|entry| entry.input)
            .unwrap_or_default()
    }

    /// Entries of `module`, newest first.
    pub fn module_history(&self, module: &str) -> Vec<HistoryEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.module == module)
            .collect()
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        let io_error = |source| HistoryError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&self.path, json).map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn store(dir: &TempDir) -> HistoryStore {
        HistoryStore::open(dir.path().join("history.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(store.entries().is_empty());
        assert_eq!(store.last("json-to-code"), "");
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(!store.save("json-to-code", "  \n", Map::new()).unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.entries().is_empty());

        store.save("json-to-code", "{}", Map::new()).unwrap();
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::open(dir.path().join("nested/deeper/history.json"));
        store.save("m", "x", Map::new()).unwrap();
        assert_eq!(store.last("m"), "x");
    }

    #[test]
    fn test_write_error_surfaces() {
        let dir = TempDir::new().unwrap();
        // The history path is a directory, so the write fails
        let store = HistoryStore::open(dir.path());
        let err = store.save("m", "x", Map::new()).unwrap_err();
        assert!(matches!(err, HistoryError::Io { .. }));
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut extra = Map::new();
        extra.insert("language".to_string(), json!("Rust"));
        store.save("json-to-code", "{\"a\": 1}", extra).unwrap();

        let entries = store.module_history("json-to-code");
        assert_eq!(entries[0].input, "{\"a\": 1}");
        assert_eq!(entries[0].get("language"), Some(&json!("Rust")));
    }
}
