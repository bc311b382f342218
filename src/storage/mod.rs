//! Key-value persistence adapter.
//!
//! The console persists JSON-encoded collections under fixed keys through a
//! synchronous get/set interface, the contract browser local storage offers.
//! Backends implement [`KeyValueStore`]; repositories stay agnostic of where
//! the bytes actually live.

use thiserror::Error;

pub mod file;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key holding the serialized lead collection.
pub const LEADS_KEY: &str = "leads";
/// Storage key holding the serialized opportunity collection.
pub const OPPORTUNITIES_KEY: &str = "opportunities";
/// Storage key holding the persisted filter configuration.
pub const LEAD_FILTERS_KEY: &str = "leadFilters";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous key-value storage: `get` yields the stored string when the
/// key is present, `set` replaces the value wholesale. There are no partial
/// writes; a failed `set` leaves the previous value intact.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
