#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use seller_console::domain::lead::{Lead, LeadStatus};
use seller_console::storage::{KeyValueStore, LEADS_KEY, MemoryStore, StorageError, StorageResult};

/// Store wrapper that rejects writes to the configured keys, for driving
/// the storage-failure paths.
#[derive(Clone, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    rejected: Arc<Mutex<HashSet<String>>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` on `key` fail.
    pub fn reject_writes_to(&self, key: &str) {
        self.rejected.lock().unwrap().insert(key.to_string());
    }

    pub fn allow_writes_to(&self, key: &str) {
        self.rejected.lock().unwrap().remove(key);
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.rejected.lock().unwrap().contains(key) {
            return Err(StorageError::Unavailable(format!(
                "writes to {key} are rejected"
            )));
        }
        self.inner.set(key, value)
    }
}

/// Store whose backend is entirely unreachable.
#[derive(Clone, Default)]
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("backend offline".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("backend offline".into()))
    }
}

pub fn lead(id: i64, name: &str, company: &str, score: u8, status: LeadStatus) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        company: company.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        source: "Referral".to_string(),
        score,
        status,
    }
}

/// A memory store pre-populated with the given lead collection.
pub fn seeded_store(leads: &[Lead]) -> MemoryStore {
    let store = MemoryStore::new();
    store
        .set(LEADS_KEY, &serde_json::to_string(leads).unwrap())
        .unwrap();
    store
}

/// A failing store pre-populated with the given lead collection; writes
/// still succeed until a key is rejected.
pub fn seeded_failing_store(leads: &[Lead]) -> FailingStore {
    let store = FailingStore::new();
    store
        .set(LEADS_KEY, &serde_json::to_string(leads).unwrap())
        .unwrap();
    store
}
