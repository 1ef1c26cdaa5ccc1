//! Disk-backed session store.
//!
//! Persists the store as a small JSON object in the platform data dir
//! (`~/.local/share/senden/session.json` or equivalent). Only the joined
//! record ever lands here; session-scoped flags stay in memory.

use std::collections::HashMap;
use std::path::PathBuf;

use senden_core::session::SessionStore;

const FILE_NAME: &str = "session.json";

/// Key-value store that writes through to a JSON file on every change.
#[derive(Debug)]
pub struct DiskStore {
    path: Option<PathBuf>,
    entries: HashMap<String, String>,
}

impl DiskStore {
    /// Load from the default platform path, starting empty if the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::at(default_path())
    }

    /// Load from an explicit path (`None` keeps the store memory-only).
    pub fn at(path: Option<PathBuf>) -> Self {
        let entries = path
            .as_deref()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// Write the store back out. Errors are logged but not propagated.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Failed to save session store: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session store: {e}"),
        }
    }
}

impl SessionStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.persist();
    }
}

/// Path to the session JSON file.
fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "senden").map(|dirs| dirs.data_dir().join(FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use senden_core::session::{joined_record, record_joined};
    use senden_core::signup::validate;

    #[test]
    fn test_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let mut store = DiskStore::at(Some(path.clone()));
        let record = validate("Ann", "ann@x.com").unwrap();
        record_joined(&mut store, &record);

        let reloaded = DiskStore::at(Some(path));
        assert_eq!(joined_record(&reloaded), Some(record));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::at(Some(dir.path().join("nope.json")));
        assert!(store.get("anything").is_none());
    }
}
