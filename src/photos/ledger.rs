//! Session-scoped download-tracking ledger.
//!
//! Two layers of deduplication: a fast in-memory set per ledger instance,
//! and a persisted session store that survives controller remounts. Keys are
//! `unsplash_dl_<photoId>` with the sentinel value `"1"`; entries are never
//! deleted by this subsystem.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::security;

/// Key prefix for download-tracking entries
const KEY_PREFIX: &str = "unsplash_dl_";

/// Presence sentinel stored for tracked photos
const SENTINEL: &str = "1";

/// Session-scoped key-value store.
///
/// Writes are append-mostly; a failed write reports `false` and is otherwise
/// ignored.
pub trait SessionStore: Send + Sync {
    /// Read a value by key.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, returning whether the write took effect.
    fn set(&self, key: &str, value: &str) -> bool;
}

/// In-memory session store, cleared when the process exits.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }
}

/// File-backed session store: one `key=value` line per entry.
///
/// Lets the CLI deduplicate across invocations within one session file.
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open (or create) a session store at the given path.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let mut entries = HashMap::new();
        if let Ok(content) = std::fs::read_to_string(&path) {
            for line in content.lines() {
                if let Some((key, value)) = line.split_once('=') {
                    entries.insert(key.to_string(), value.to_string());
                }
            }
        }
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) -> bool {
        let mut content = String::new();
        for (key, value) in entries {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }
        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::warn!("Session store write failed: {e}");
            return false;
        }
        true
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }
}

/// Per-controller download deduplication over a shared session store.
///
/// The in-memory set is the optimistic fast path guarding against races
/// within one instance; the session store is the cross-remount source of
/// truth.
#[derive(Clone)]
pub struct DownloadLedger {
    tracked: Arc<Mutex<HashSet<String>>>,
    store: Arc<dyn SessionStore>,
}

impl Default for DownloadLedger {
    fn default() -> Self {
        Self::new(Arc::new(MemorySessionStore::default()))
    }
}

impl DownloadLedger {
    /// Create a ledger over a session store.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            tracked: Arc::new(Mutex::new(HashSet::new())),
            store,
        }
    }

    fn session_key(photo_id: &str) -> String {
        security::validate_storage_key(&format!("{KEY_PREFIX}{photo_id}"))
    }

    /// Whether a photo has already been tracked, in memory or in the
    /// session store.
    #[must_use]
    pub fn is_tracked(&self, photo_id: &str) -> bool {
        if self.tracked.lock().unwrap().contains(photo_id) {
            return true;
        }
        self.store
            .get(&Self::session_key(photo_id))
            .is_some_and(|value| value == SENTINEL)
    }

    /// Optimistically mark a photo as tracked in memory, before the network
    /// call. Returns `false` if it was already marked.
    pub fn mark_in_memory(&self, photo_id: &str) -> bool {
        self.tracked.lock().unwrap().insert(photo_id.to_string())
    }

    /// Roll back an optimistic in-memory mark after a failed track call so a
    /// later retry is possible.
    pub fn unmark_in_memory(&self, photo_id: &str) {
        self.tracked.lock().unwrap().remove(photo_id);
    }

    /// Persist a successful track to the session store.
    pub fn persist(&self, photo_id: &str) {
        self.store.set(&Self::session_key(photo_id), SENTINEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_by_default() {
        let ledger = DownloadLedger::default();
        assert!(!ledger.is_tracked("abc123"));
    }

    #[test]
    fn test_memory_mark_and_rollback() {
        let ledger = DownloadLedger::default();

        assert!(ledger.mark_in_memory("abc123"));
        assert!(ledger.is_tracked("abc123"));
        assert!(!ledger.mark_in_memory("abc123"));

        ledger.unmark_in_memory("abc123");
        assert!(!ledger.is_tracked("abc123"));
    }

    #[test]
    fn test_persisted_entry_survives_remount() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::default());

        let ledger = DownloadLedger::new(Arc::clone(&store));
        ledger.mark_in_memory("abc123");
        ledger.persist("abc123");

        // A fresh ledger over the same store models a component remount.
        let remounted = DownloadLedger::new(store);
        assert!(remounted.is_tracked("abc123"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.kv");

        {
            let store = FileSessionStore::open(path.clone());
            assert!(store.set("unsplash_dl_abc123", "1"));
        }

        let reopened = FileSessionStore::open(path);
        assert_eq!(reopened.get("unsplash_dl_abc123").as_deref(), Some("1"));
        assert!(reopened.get("unsplash_dl_other").is_none());
    }

    #[test]
    fn test_session_key_sanitized() {
        // Hostile photo ids cannot inject separators into the store key.
        let key = DownloadLedger::session_key("a/b<c>");
        assert_eq!(key, "unsplash_dl_abc");
    }
}
