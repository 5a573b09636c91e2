use shared::storage::KeyValueStore;
use shared::StorageError;
use web_sys::{window, Storage};

/// `localStorage` behind the shared store contract.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
