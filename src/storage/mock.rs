//! Mock storage backend for isolating repositories in downstream tests.

use mockall::mock;

use super::{KeyValueStore, StorageResult};

mock! {
    pub Store {}

    impl KeyValueStore for Store {
        fn get(&self, key: &str) -> StorageResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    }
}
