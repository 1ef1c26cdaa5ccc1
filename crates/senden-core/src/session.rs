//! Key-value session state.
//!
//! Client-side state that used to live in ambient globals is threaded
//! through a small store abstraction instead: callers inject whichever
//! implementation fits their lifetime (in-process for session-scoped flags,
//! disk-backed for the one key that survives restarts).

use std::collections::HashMap;

use crate::signup::SignupRecord;

/// The single persisted key: the last successful waitlist submission.
pub const JOINED_KEY: &str = "waitlist.joined";

/// A string key-value store with unspecified lifetime.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-process store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Read the recorded last submission, if any.
///
/// An unreadable record is treated as absent; the caller just shows the
/// form again.
pub fn joined_record(store: &dyn SessionStore) -> Option<SignupRecord> {
    let raw = store.get(JOINED_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Discarding unreadable joined record: {e}");
            None
        }
    }
}

/// Record a successful submission for future visits.
pub fn record_joined(store: &mut dyn SessionStore, record: &SignupRecord) {
    match serde_json::to_string(record) {
        Ok(json) => store.put(JOINED_KEY, json),
        Err(e) => tracing::warn!("Failed to serialize joined record: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::validate;

    #[test]
    fn test_joined_record_roundtrip() {
        let mut store = MemoryStore::default();
        assert!(joined_record(&store).is_none());

        let record = validate("Ann", "ann@x.com").unwrap();
        record_joined(&mut store, &record);
        assert_eq!(joined_record(&store), Some(record));
    }

    #[test]
    fn test_garbage_record_reads_as_absent() {
        let mut store = MemoryStore::default();
        store.put(JOINED_KEY, "not json".into());
        assert!(joined_record(&store).is_none());
    }
}
